//! Bevy host for the layout engine.
//!
//! The primary window is the container and every [`HexItem`] entity is one
//! item. A layout pass runs whenever the window size, the config or the item
//! set changes, and writes the placements into the items' transforms.

mod entities;
mod startup_systems;
mod systems;

pub use entities::{HexItem, ItemSlot, LayoutState};

use bevy::prelude::*;

use crate::AppState;
use crate::layout::{DEFAULT_RADIUS, Padding};

/// Item count used when nothing else is configured.
pub const DEFAULT_ITEM_COUNT: u32 = 24;

/// Configuration for the hex grid host.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct HexGridConfig {
    /// Hexagon radius in logical pixels (half the vertical diameter).
    pub radius: i32,
    /// Radius change per `+` / `-` key press. Also the smallest radius the
    /// keys can reach.
    pub radius_step: i32,
    /// Number of items to spawn and lay out.
    pub item_count: u32,
    /// Inner spacing between the window edge and the grid.
    pub padding: Padding,
    /// Smallest container size the grid asks for.
    pub min_size: IVec2,
    /// Fraction of the item rectangle the hexagon mesh covers.
    pub tile_fill: f32,
    /// Per-item tint settings.
    pub tint: TintSettings,
    /// Background clear color.
    pub clear_color: Color,
}

/// Noise parameters for the per-item tint.
#[derive(Clone, Debug, Reflect)]
pub struct TintSettings {
    /// Seed for the tint noise generator.
    pub seed: u32,
    /// Number of octaves for tint noise.
    pub octaves: usize,
    /// Noise-space distance between consecutive item indices.
    pub frequency: f64,
    /// Darkest tile lightness.
    pub min_lightness: f32,
    /// Brightest tile lightness.
    pub max_lightness: f32,
}

impl Default for HexGridConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            radius_step: 4,
            item_count: DEFAULT_ITEM_COUNT,
            padding: Padding::ZERO,
            min_size: IVec2::new(200, 200),
            tile_fill: 0.92,
            tint: TintSettings {
                seed: 42,
                octaves: 3,
                frequency: 0.37,
                min_lightness: 0.25,
                max_lightness: 1.0,
            },
            clear_color: Color::srgb(0.01, 0.01, 0.02),
        }
    }
}

/// Hex grid plugin: camera and tile assets at startup, layout passes at runtime.
pub struct HexGridPlugin(pub HexGridConfig);

impl Plugin for HexGridPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<HexGridConfig>()
            .register_type::<HexItem>()
            .register_type::<ItemSlot>()
            .register_type::<LayoutState>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .init_resource::<LayoutState>()
            .add_systems(
                Startup,
                (
                    startup_systems::spawn_camera,
                    startup_systems::create_item_assets,
                ),
            )
            .add_systems(Update, systems::adjust_config)
            .add_systems(
                Update,
                systems::sync_item_count.after(systems::adjust_config),
            )
            .add_systems(
                Update,
                systems::run_layout_pass.after(systems::sync_item_count),
            );

        app.add_systems(
            Update,
            systems::draw_item_labels
                .after(systems::run_layout_pass)
                .run_if(in_state(AppState::Debugging)),
        );
    }
}
