//! Staggered hexagon layout engine.
//!
//! Two pure phases: [`compute_geometry`] derives the grid from the container
//! size, padding and radius, then [`place_item`] / [`Placements`] map item
//! indices to pixel rectangles. Odd columns are shifted down by one radius and
//! hold one row fewer. Nothing here touches the ECS.

mod error;
mod geometry;
mod measure;
mod placement;

pub use error::{GeometryFault, LayoutError};
pub use geometry::{GridGeometry, Padding, compute_geometry, supported_child_count};
pub use measure::{Measurement, measure};
pub use placement::{
    Cell, ItemState, LayoutPass, Placement, Placements, cell_for_index, index_for_cell,
    layout_pass, place_item,
};

/// Hexagon radius used when nothing else is configured.
pub const DEFAULT_RADIUS: i32 = 48;
