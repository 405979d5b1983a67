#![warn(missing_docs)]
//! Hex grid viewer.
//!
//! Fills the window with a staggered grid of hexagon tiles and re-lays them
//! out whenever the window, the radius or the item count changes.

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::window::{WindowResizeConstraints, WindowResolution};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use hex_grid_layout::AppState;
use hex_grid_layout::grid::{HexGridConfig, HexGridPlugin};

/// Window size when none is given on the command line.
const DEFAULT_WINDOW: UVec2 = UVec2::new(800, 600);

#[cfg(feature = "native")]
mod cli {
    use bevy::prelude::*;
    use clap::Parser;
    use hex_grid_layout::grid::{DEFAULT_ITEM_COUNT, HexGridConfig};
    use hex_grid_layout::layout::{DEFAULT_RADIUS, Padding};

    /// Staggered hexagon grid viewer.
    #[derive(Parser, Debug)]
    #[command(version)]
    pub struct Args {
        /// Hexagon radius in pixels (half the vertical diameter).
        #[arg(long, default_value_t = DEFAULT_RADIUS)]
        pub radius: i32,
        /// Number of items to lay out.
        #[arg(long, default_value_t = DEFAULT_ITEM_COUNT)]
        pub items: u32,
        /// Padding on every side of the window, in pixels.
        #[arg(long, default_value_t = 0)]
        pub padding: i32,
        /// Initial window width.
        #[arg(long, default_value_t = super::DEFAULT_WINDOW.x)]
        pub width: u32,
        /// Initial window height.
        #[arg(long, default_value_t = super::DEFAULT_WINDOW.y)]
        pub height: u32,
    }

    impl Args {
        /// Grid config and window size from the parsed arguments.
        pub fn into_settings(self) -> (HexGridConfig, UVec2) {
            let cfg = HexGridConfig {
                radius: self.radius,
                item_count: self.items,
                padding: Padding::all(self.padding),
                ..default()
            };
            (cfg, UVec2::new(self.width, self.height))
        }
    }

}

#[cfg(feature = "native")]
fn launch_settings() -> (HexGridConfig, UVec2) {
    use clap::Parser;
    cli::Args::parse().into_settings()
}

#[cfg(not(feature = "native"))]
fn launch_settings() -> (HexGridConfig, UVec2) {
    (HexGridConfig::default(), DEFAULT_WINDOW)
}

fn main() {
    let (cfg, window_size) = launch_settings();
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hex Grid".into(),
            resolution: WindowResolution::new(window_size.x, window_size.y),
            resize_constraints: WindowResizeConstraints {
                min_width: cfg.min_size.x as f32,
                min_height: cfg.min_size.y as f32,
                ..default()
            },
            ..default()
        }),
        ..default()
    }))
    .register_type::<AppState>()
    .init_state::<AppState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(HexGridPlugin(cfg))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(AppState::Debugging)));

    #[cfg(feature = "native")]
    {
        use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
        app.add_plugins(RemotePlugin::default())
            .add_plugins(RemoteHttpPlugin::default());
    }

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            AppState::Running => AppState::Debugging,
            AppState::Debugging => AppState::Running,
        });
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
