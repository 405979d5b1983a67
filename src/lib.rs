#![warn(missing_docs)]
//! Staggered hexagon grid layout.
//!
//! [`layout`] is the pure engine: it derives column and row counts from a
//! container and a hexagon radius, then maps item indices to pixel
//! rectangles. [`grid`] hosts it in a Bevy app where the primary window is
//! the container and hexagon tiles are the items.

pub mod grid;
pub mod layout;
pub mod math;

use bevy::prelude::*;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum AppState {
    /// Normal viewing.
    #[default]
    Running,
    /// Debug overlay active (Tab to toggle).
    Debugging,
}
