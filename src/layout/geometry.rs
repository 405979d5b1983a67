use bevy::log::debug;
use bevy::prelude::*;

use super::error::{GeometryFault, LayoutError};

/// Inner spacing of the container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub struct Padding {
    /// Left inset.
    pub left: i32,
    /// Right inset.
    pub right: i32,
    /// Top inset.
    pub top: i32,
    /// Bottom inset.
    pub bottom: i32,
}

impl Padding {
    /// No padding on any side.
    pub const ZERO: Self = Self::all(0);

    /// The same inset on all four sides.
    pub const fn all(px: i32) -> Self {
        Self {
            left: px,
            right: px,
            top: px,
            bottom: px,
        }
    }

    /// Sum of the left and right insets, saturating at `i32::MAX`.
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of the top and bottom insets, saturating at `i32::MAX`.
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    fn is_negative(&self) -> bool {
        self.left < 0 || self.right < 0 || self.top < 0 || self.bottom < 0
    }
}

/// Grid parameters derived once per layout pass.
///
/// Produced by [`compute_geometry`]; every field is a pure function of the
/// container size, padding and radius, so two passes with the same inputs
/// yield equal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub struct GridGeometry {
    /// Hexagon radius (half the vertical diameter).
    pub radius: i32,
    /// Padding the geometry was computed with.
    pub padding: Padding,
    /// Horizontal distance between adjacent columns, `trunc(sqrt(3) * r)`.
    pub width_segment: i32,
    /// Horizontal overhang of a hexagon's point, `trunc(r / sqrt(3))`.
    pub width_excess: i32,
    /// Area left for columns and rows after padding and overhang.
    pub usable: IVec2,
    /// Number of columns that fit.
    pub column_count: u32,
    /// Number of rows that fit in an even column.
    pub row_count: u32,
    /// Pixels left over horizontally after packing the columns.
    pub unused_width: i32,
    /// Pixels left over vertically after packing the rows.
    pub unused_height: i32,
}

impl GridGeometry {
    /// Vertical distance between rows, `2r`.
    pub const fn row_height(&self) -> i32 {
        self.radius.saturating_mul(2)
    }

    /// Exact size every item must be measured to: `4 * width_excess` by `2r`.
    pub const fn child_size(&self) -> IVec2 {
        IVec2::new(self.width_excess.saturating_mul(4), self.row_height())
    }

    /// Top-left pixel of cell `(0, 0)`, centering the grid in the slack.
    pub const fn origin(&self) -> IVec2 {
        IVec2::new(
            self.padding.left + self.unused_width / 2,
            self.padding.top + self.unused_height / 2,
        )
    }

    /// Number of rows column `column` can hold. Odd columns sit `r` lower and
    /// lose their last row.
    pub const fn rows_in_column(&self, column: u32) -> u32 {
        if column.is_multiple_of(2) {
            self.row_count
        } else {
            self.row_count.saturating_sub(1)
        }
    }

    /// Maximum number of items the grid places. See [`supported_child_count`].
    pub fn supported_child_count(&self) -> u32 {
        supported_child_count(self)
    }
}

/// Derives the grid from the container size, its padding and the radius.
///
/// Segment and overhang widths are truncated toward zero. A container too
/// small for a single segment or row is valid and yields zero counts. A
/// non-positive radius, container or usable area is an error, as is a radius
/// whose item size does not fit in `i32`.
///
/// # Examples
/// ```
/// # use bevy::math::IVec2;
/// # use hex_grid_layout::layout::{Padding, compute_geometry};
/// let g = compute_geometry(IVec2::new(300, 300), Padding::ZERO, 48).unwrap();
/// assert_eq!((g.width_segment, g.width_excess), (83, 27));
/// assert_eq!((g.column_count, g.row_count), (3, 3));
/// assert_eq!(g.supported_child_count(), 8);
/// ```
pub fn compute_geometry(
    container: IVec2,
    padding: Padding,
    radius: i32,
) -> Result<GridGeometry, LayoutError> {
    if radius <= 0 {
        return Err(GeometryFault::NonPositiveRadius(radius).into());
    }
    if container.x <= 0 || container.y <= 0 {
        return Err(GeometryFault::NonPositiveContainer {
            width: container.x,
            height: container.y,
        }
        .into());
    }
    if padding.is_negative() {
        return Err(GeometryFault::NegativePadding(padding).into());
    }

    let sqrt3 = 3f64.sqrt();
    let width_excess = (f64::from(radius) / sqrt3) as i32;
    // 4 * excess is the widest derived length, above 2r and sqrt(3) * r
    let (Some(row_height), Some(_)) = (radius.checked_mul(2), width_excess.checked_mul(4)) else {
        return Err(GeometryFault::RadiusTooLarge(radius).into());
    };
    let width_segment = (sqrt3 * f64::from(radius)) as i32;

    let usable_x = i64::from(container.x)
        - i64::from(padding.left)
        - i64::from(padding.right)
        - i64::from(width_excess);
    let usable_y = i64::from(container.y) - i64::from(padding.top) - i64::from(padding.bottom);
    if usable_x <= 0 || usable_y <= 0 {
        return Err(GeometryFault::NoUsableArea {
            width: clamp_to_i32(usable_x),
            height: clamp_to_i32(usable_y),
        }
        .into());
    }
    // both are below the container size here
    let usable = IVec2::new(clamp_to_i32(usable_x), clamp_to_i32(usable_y));

    let column_count = usable.x / width_segment;
    let row_count = usable.y / row_height;

    let geometry = GridGeometry {
        radius,
        padding,
        width_segment,
        width_excess,
        usable,
        column_count: column_count as u32,
        row_count: row_count as u32,
        unused_width: usable.x - column_count * width_segment,
        unused_height: usable.y - row_count * row_height,
    };
    debug!(
        "hex geometry: segment {} excess {}, {}x{} cells, unused {}x{}",
        geometry.width_segment,
        geometry.width_excess,
        geometry.column_count,
        geometry.row_count,
        geometry.unused_width,
        geometry.unused_height
    );
    Ok(geometry)
}

fn clamp_to_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Maximum number of items `geometry` can place:
/// `columns * rows - floor(columns / 2)`, never negative.
pub fn supported_child_count(geometry: &GridGeometry) -> u32 {
    geometry
        .column_count
        .saturating_mul(geometry.row_count)
        .saturating_sub(geometry.column_count / 2)
}
