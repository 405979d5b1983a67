use thiserror::Error;

use super::Padding;

/// Errors returned by the layout engine.
///
/// Running out of capacity is not represented here: placement simply ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The container, padding or radius cannot produce a grid.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryFault),
}

/// Which precondition of [`compute_geometry`](super::compute_geometry) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryFault {
    /// Radius was zero or negative.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(i32),

    /// Container width or height was zero or negative.
    #[error("container must be positive, got {width}x{height}")]
    NonPositiveContainer {
        /// Requested container width.
        width: i32,
        /// Requested container height.
        height: i32,
    },

    /// One of the four padding sides was negative.
    #[error("padding must not be negative, got {0:?}")]
    NegativePadding(Padding),

    /// Padding and point overhang consumed the whole container on some axis.
    #[error("no usable area left after padding, got {width}x{height}")]
    NoUsableArea {
        /// Width left after padding and overhang, clamped to `i32`.
        width: i32,
        /// Height left after padding, clamped to `i32`.
        height: i32,
    },

    /// Radius so large that the item size overflows `i32`.
    #[error("radius {0} is too large to lay out")]
    RadiusTooLarge(i32),
}
