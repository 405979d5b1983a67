//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec2` / `IRect` inputs. They bridge the layout engine's
//! pixel space (top-left origin, y down) and the scene's world space.

use bevy::prelude::{IRect, IVec2, Vec2, Vec3};

/// Maps a noise value from the standard `[-1, 1]` range into `[min, max]`.
///
/// Noise generators (e.g. `Fbm<Perlin>`) produce values centred around zero.
/// This linearly rescales to an arbitrary output range.
///
/// # Examples
/// ```
/// # use hex_grid_layout::math::map_noise_to_range;
/// assert_eq!(map_noise_to_range(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(map_noise_to_range( 1.0, 0.0, 10.0), 10.0);
/// assert_eq!(map_noise_to_range( 0.0, 2.0, 6.0),  4.0);
/// ```
pub fn map_noise_to_range(noise_val: f64, min: f32, max: f32) -> f32 {
    min + ((noise_val as f32 + 1.0) / 2.0) * (max - min)
}

/// Center of a pixel rectangle, without integer rounding.
pub fn rect_center(rect: IRect) -> Vec2 {
    rect.min.as_vec2() + rect.size().as_vec2() / 2.0
}

/// Converts a window pixel position into the ground plane (`y = 0`).
///
/// The camera looks straight down with `-Z` as screen-up, so pixel `x` maps to
/// world `x` and pixel `y` (growing downward) maps to world `z`. The window
/// center is the world origin and one world unit is one logical pixel.
pub fn pixel_to_world(pixel: Vec2, window: Vec2) -> Vec3 {
    let centered = pixel - window / 2.0;
    Vec3::new(centered.x, 0.0, centered.y)
}

/// Scale that stretches a unit flat-topped hexagon (circumradius 1, so
/// `2 x sqrt(3)`) over an item of `size` pixels, shrunk by `fill` to leave a
/// visible gap.
///
/// The engine's items are `4 * trunc(r / sqrt(3))` by `2r`, so both axes come
/// out close to `2r / sqrt(3)`.
pub fn item_scale(size: IVec2, fill: f32) -> Vec3 {
    let size = size.as_vec2() * fill;
    Vec3::new(size.x / 2.0, 1.0, size.y / 3f32.sqrt())
}

/// Converts the window's logical size into the engine's integer container.
///
/// Fractional pixels are dropped, matching how the engine truncates.
pub fn container_size(window: Vec2) -> IVec2 {
    window.as_ivec2()
}
