use bevy::prelude::*;

use super::{GridGeometry, LayoutError, Padding, compute_geometry};

/// Result of measuring the container for one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Geometry the placement phase runs against.
    pub geometry: GridGeometry,
    /// Exact size the host must give every item.
    pub child_size: IVec2,
    /// Size the container asks for: the offered size, raised to `min_size`.
    pub desired_size: IVec2,
}

/// Measures the container: derives the geometry, the forced item size and the
/// desired container size.
pub fn measure(
    container: IVec2,
    padding: Padding,
    radius: i32,
    min_size: IVec2,
) -> Result<Measurement, LayoutError> {
    let geometry = compute_geometry(container, padding, radius)?;
    Ok(Measurement {
        geometry,
        child_size: geometry.child_size(),
        desired_size: container.max(min_size),
    })
}
