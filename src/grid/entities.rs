use bevy::prelude::*;

use crate::layout::{Cell, GridGeometry, ItemState};

/// One laid-out item. `index` is its position in child order.
#[derive(Component, Reflect)]
pub struct HexItem {
    /// Position in child order; indices are contiguous from zero.
    pub index: u32,
    /// Hidden, but still holding its cell.
    pub gone: bool,
}

impl HexItem {
    /// A visible item at `index`.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            gone: false,
        }
    }

    /// Item state as the layout engine sees it.
    pub fn state(&self) -> ItemState {
        if self.gone {
            ItemState::Gone
        } else {
            ItemState::Visible
        }
    }
}

/// Result of the last layout pass for one item.
#[derive(Component, Default, Reflect, Clone, Copy, Debug, PartialEq)]
pub struct ItemSlot {
    /// Cell the item occupies, `None` when it was not placed.
    pub cell: Option<Cell>,
    /// Center of the item rectangle in logical window pixels.
    pub center: Vec2,
}

/// Summary of the last layout pass.
#[derive(Resource, Default, Reflect, Debug)]
pub struct LayoutState {
    /// Container size the pass ran against.
    pub container: IVec2,
    /// Size the grid asked the window for.
    pub desired_size: IVec2,
    /// Geometry of the pass, `None` when it was invalid.
    pub geometry: Option<GridGeometry>,
    /// Items that received a cell and are shown.
    pub placed: u32,
    /// Gone items that kept their cell.
    pub gone: u32,
    /// Items past capacity.
    pub dropped: u32,
}

/// Shared mesh for every item.
#[derive(Resource)]
pub struct ItemAssets {
    /// Unit flat-topped hexagon on the XZ plane.
    pub mesh: Handle<Mesh>,
}
