use std::iter::FusedIterator;

use bevy::log::trace;
use bevy::prelude::*;

use super::GridGeometry;

/// A staggered grid cell. Odd columns are shifted down by one radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub struct Cell {
    /// Column, counted from the left.
    pub column: u32,
    /// Row slot within the column, counted from the top.
    pub row: u32,
}

impl Cell {
    /// Creates a cell at `(column, row)`.
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// True for odd columns, which carry the half-row offset.
    pub const fn is_staggered(&self) -> bool {
        !self.column.is_multiple_of(2)
    }
}

/// Where one item goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Item index in the host's child order.
    pub index: u32,
    /// Grid cell the item occupies.
    pub cell: Cell,
    /// Pixel rectangle, top-left origin, y growing downward.
    pub rect: IRect,
}

/// Presence of a host item during a layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum ItemState {
    /// Laid out normally.
    #[default]
    Visible,
    /// Not laid out, but still consumes its cell.
    Gone,
}

/// Maps an item index to its cell, or `None` past capacity.
///
/// Columns fill top to bottom, left to right. An even/odd column pair holds
/// `2 * rows - 1` items, so the mapping needs no cursor.
pub fn cell_for_index(geometry: &GridGeometry, index: u32) -> Option<Cell> {
    if index >= geometry.supported_child_count() {
        return None;
    }
    let rows = geometry.row_count;
    let per_pair = 2 * rows - 1;
    let pair = index / per_pair;
    let rem = index % per_pair;
    let cell = if rem < rows {
        Cell::new(2 * pair, rem)
    } else {
        Cell::new(2 * pair + 1, rem - rows)
    };
    Some(cell)
}

/// Inverse of [`cell_for_index`]. `None` for cells outside the grid, including
/// the missing last row of odd columns.
pub fn index_for_cell(geometry: &GridGeometry, cell: Cell) -> Option<u32> {
    if cell.column >= geometry.column_count || cell.row >= geometry.rows_in_column(cell.column) {
        return None;
    }
    let rows = geometry.row_count;
    let base = (cell.column / 2) * (2 * rows - 1);
    let index = if cell.is_staggered() {
        base + rows + cell.row
    } else {
        base + cell.row
    };
    Some(index)
}

/// Pixel rectangle for item `index`, or `None` once the grid is full.
///
/// # Examples
/// ```
/// # use bevy::math::{IRect, IVec2};
/// # use hex_grid_layout::layout::{Cell, Padding, compute_geometry, place_item};
/// let g = compute_geometry(IVec2::splat(300), Padding::ZERO, 48).unwrap();
/// let first = place_item(&g, 0).unwrap();
/// assert_eq!(first.cell, Cell::new(0, 0));
/// assert_eq!(first.rect, IRect::new(12, 6, 12 + 108, 6 + 96));
/// assert!(place_item(&g, 8).is_none());
/// ```
pub fn place_item(geometry: &GridGeometry, index: u32) -> Option<Placement> {
    let cell = cell_for_index(geometry, index)?;
    let origin = geometry.origin();
    let left = origin.x + cell.column as i32 * geometry.width_segment;
    let mut top = origin.y + cell.row as i32 * geometry.row_height();
    if cell.is_staggered() {
        top += geometry.radius;
    }
    let min = IVec2::new(left, top);
    trace!(
        "item {index} -> cell ({}, {}) at ({left}, {top})",
        cell.column, cell.row
    );
    Some(Placement {
        index,
        cell,
        rect: IRect::from_corners(min, min.saturating_add(geometry.child_size())),
    })
}

/// Lazy placement sequence over `min(item_count, capacity)` items.
///
/// The iterator owns a copy of the geometry, so a clone replays the same
/// placements from wherever the source iterator stood.
#[derive(Clone, Debug)]
pub struct Placements {
    geometry: GridGeometry,
    next: u32,
    end: u32,
}

impl Placements {
    /// Placements for the first `item_count` items, stopping at capacity.
    pub fn new(geometry: GridGeometry, item_count: u32) -> Self {
        Self {
            geometry,
            next: 0,
            end: item_count.min(geometry.supported_child_count()),
        }
    }
}

impl Iterator for Placements {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        if self.next >= self.end {
            return None;
        }
        let placement = place_item(&self.geometry, self.next);
        self.next += 1;
        placement
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.end - self.next) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Placements {}

impl FusedIterator for Placements {}

impl GridGeometry {
    /// Shorthand for [`Placements::new`].
    pub fn placements(&self, item_count: u32) -> Placements {
        Placements::new(*self, item_count)
    }
}

/// Outcome of laying out every host item once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutPass {
    /// Placements of visible items, ordered by index.
    pub placements: Vec<Placement>,
    /// Items marked [`ItemState::Gone`] that kept their cell.
    pub gone: u32,
    /// Items past capacity that were not placed.
    pub dropped: u32,
}

impl LayoutPass {
    /// Placement of item `index`, if it was laid out.
    pub fn get(&self, index: u32) -> Option<&Placement> {
        self.placements
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|at| &self.placements[at])
    }
}

/// Lays out the host's items in order.
///
/// Gone items keep their cell so later items do not shift when an earlier one
/// is hidden.
pub fn layout_pass(
    geometry: &GridGeometry,
    items: impl IntoIterator<Item = ItemState>,
) -> LayoutPass {
    let capacity = geometry.supported_child_count();
    let mut pass = LayoutPass::default();
    for (index, state) in (0u32..).zip(items) {
        if index >= capacity {
            pass.dropped += 1;
            continue;
        }
        match state {
            ItemState::Gone => pass.gone += 1,
            ItemState::Visible => pass.placements.extend(place_item(geometry, index)),
        }
    }
    pass
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::layout::{Padding, compute_geometry};

    fn geometry(width: i32, height: i32, radius: i32) -> GridGeometry {
        compute_geometry(IVec2::new(width, height), Padding::ZERO, radius).unwrap()
    }

    /// Column-by-column cursor walk with parity-dependent wraparound.
    fn cursor_walk(g: &GridGeometry) -> Vec<Cell> {
        let rows = g.row_count;
        let (mut a, mut b) = (0u32, 0u32);
        let mut cells = Vec::new();
        for _ in 0..g.supported_child_count() {
            cells.push(Cell::new(a, b));
            b += 1;
            let limit = if a.is_multiple_of(2) { rows } else { rows - 1 };
            if b >= limit {
                b = 0;
                a += 1;
            }
        }
        cells
    }

    // ── index ↔ cell ────────────────────────────────────────────────

    #[test]
    fn mapping_matches_cursor_walk() {
        for (w, h, r) in [(300, 300, 48), (800, 600, 30), (1024, 300, 20), (500, 1000, 41)] {
            let g = geometry(w, h, r);
            assert!(g.row_count >= 2);
            let mapped: Vec<Cell> = (0..g.supported_child_count())
                .map(|i| cell_for_index(&g, i).unwrap())
                .collect();
            assert_eq!(mapped, cursor_walk(&g), "{w}x{h} r={r}");
        }
    }

    #[test]
    fn index_for_cell_inverts_cell_for_index() {
        let g = geometry(800, 600, 30);
        for index in 0..g.supported_child_count() {
            let cell = cell_for_index(&g, index).unwrap();
            assert_eq!(index_for_cell(&g, cell), Some(index));
        }
    }

    #[test]
    fn missing_cells_have_no_index() {
        let g = geometry(300, 300, 48);
        // odd column 1 has only two rows
        assert_eq!(index_for_cell(&g, Cell::new(1, 2)), None);
        assert_eq!(index_for_cell(&g, Cell::new(3, 0)), None);
        assert_eq!(index_for_cell(&g, Cell::new(0, 3)), None);
        assert_eq!(index_for_cell(&g, Cell::new(2, 2)), Some(7));
    }

    #[test]
    fn single_row_uses_even_columns_only() {
        // 600 wide, 100 tall at r = 48: one row, six columns
        let g = geometry(600, 100, 48);
        assert_eq!((g.column_count, g.row_count), (6, 1));
        assert_eq!(g.supported_child_count(), 3);
        let columns: Vec<u32> = (0..3).map(|i| cell_for_index(&g, i).unwrap().column).collect();
        assert_eq!(columns, vec![0, 2, 4]);
    }

    // ── pixel placement ────────────────────────────────────────────

    #[test]
    fn reference_container_places_eight_items() {
        let g = geometry(300, 300, 48);
        let tops_lefts: Vec<(i32, i32)> = g
            .placements(u32::MAX)
            .map(|p| (p.rect.min.x, p.rect.min.y))
            .collect();
        assert_eq!(
            tops_lefts,
            vec![
                (12, 6),
                (12, 102),
                (12, 198),
                (95, 54),
                (95, 150),
                (178, 6),
                (178, 102),
                (178, 198),
            ]
        );
    }

    #[test]
    fn first_item_sits_at_centered_origin() {
        let padding = Padding {
            left: 9,
            right: 0,
            top: 4,
            bottom: 0,
        };
        let g = compute_geometry(IVec2::new(640, 480), padding, 40).unwrap();
        let first = place_item(&g, 0).unwrap();
        assert_eq!(first.cell, Cell::new(0, 0));
        assert_eq!(
            first.rect.min,
            IVec2::new(9 + g.unused_width / 2, 4 + g.unused_height / 2)
        );
        assert_eq!(first.rect.size(), g.child_size());
    }

    #[test]
    fn odd_columns_are_shifted_by_radius() {
        let g = geometry(800, 600, 30);
        let even = place_item(&g, index_for_cell(&g, Cell::new(0, 1)).unwrap()).unwrap();
        let odd = place_item(&g, index_for_cell(&g, Cell::new(1, 1)).unwrap()).unwrap();
        assert_eq!(odd.rect.min.y - even.rect.min.y, g.radius);
        assert_eq!(odd.rect.min.x - even.rect.min.x, g.width_segment);
    }

    #[test]
    fn index_at_capacity_is_none() {
        let g = geometry(300, 300, 48);
        assert!(place_item(&g, 7).is_some());
        assert!(place_item(&g, 8).is_none());
        assert!(place_item(&g, u32::MAX).is_none());
    }

    #[test]
    fn cells_are_distinct_and_hexagons_do_not_overlap() {
        let g = geometry(1000, 700, 37);
        let placed: Vec<Placement> = g.placements(u32::MAX).collect();
        let cells: HashSet<Cell> = placed.iter().map(|p| p.cell).collect();
        assert_eq!(cells.len(), placed.len());

        // Flat-topped hexagons with apothem r never overlap when their centers
        // are at least 2r apart, or exactly one column apart with a vertical
        // offset of r.
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                let d = b.rect.center() - a.rect.center();
                let (dx, dy) = (d.x.abs(), d.y.abs());
                let apart = dx >= 2 * g.width_segment
                    || dy >= g.row_height()
                    || (dx == g.width_segment && dy >= g.radius);
                assert!(apart, "{:?} overlaps {:?}", a.cell, b.cell);
            }
        }
    }

    #[test]
    fn single_row_rects_stay_inside_container() {
        let (w, h) = (600, 100);
        let g = geometry(w, h, 48);
        let rects: Vec<IRect> = g.placements(u32::MAX).map(|p| p.rect).collect();
        assert_eq!(
            rects,
            vec![
                IRect::new(37, 2, 145, 98),
                IRect::new(203, 2, 311, 98),
                IRect::new(369, 2, 477, 98),
            ]
        );
        let container = IRect::new(0, 0, w, h);
        for rect in &rects {
            assert_eq!(container.intersect(*rect), *rect);
        }
        // an item in odd column 1 would start r lower and cross the bottom edge
        let odd_bottom = g.origin().y + g.radius + g.row_height();
        assert!(odd_bottom > h);
    }

    #[test]
    fn placements_stay_inside_container() {
        let (w, h) = (777, 555);
        let g = geometry(w, h, 33);
        for p in g.placements(u32::MAX) {
            assert!(p.rect.min.x >= 0 && p.rect.min.y >= 0);
            assert!(p.rect.max.x <= w && p.rect.max.y <= h, "{:?}", p.cell);
        }
    }

    // ── sequence ────────────────────────────────────────────────────

    #[test]
    fn sequence_is_ordered_and_exact_sized() {
        let g = geometry(800, 600, 30);
        let seq = g.placements(10);
        assert_eq!(seq.len(), 10);
        let indices: Vec<u32> = seq.map(|p| p.index).collect();
        assert_eq!(indices, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn sequence_stops_at_capacity() {
        let g = geometry(300, 300, 48);
        let mut seq = g.placements(100);
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.by_ref().count(), 8);
        assert!(seq.next().is_none());
    }

    #[test]
    fn sequence_is_restartable() {
        let g = geometry(640, 480, 24);
        let first: Vec<Placement> = g.placements(50).collect();
        let second: Vec<Placement> = g.placements(50).collect();
        assert_eq!(first, second);

        let mut seq = g.placements(50);
        seq.nth(4);
        let replay: Vec<Placement> = seq.clone().collect();
        assert_eq!(replay, seq.collect::<Vec<_>>());
    }

    #[test]
    fn no_columns_means_empty_sequence() {
        let g = geometry(100, 300, 48);
        assert_eq!(g.placements(10).count(), 0);
    }

    // ── layout pass ────────────────────────────────────────────────

    #[test]
    fn gone_items_keep_their_cell() {
        let g = geometry(300, 300, 48);
        let states = [
            ItemState::Visible,
            ItemState::Gone,
            ItemState::Visible,
            ItemState::Visible,
        ];
        let pass = layout_pass(&g, states);
        assert_eq!(pass.gone, 1);
        assert_eq!(pass.dropped, 0);
        let indices: Vec<u32> = pass.placements.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        assert_eq!(pass.get(2).unwrap().cell, Cell::new(0, 2));
        assert_eq!(pass.get(3).unwrap().cell, Cell::new(1, 0));
        assert!(pass.get(1).is_none());
    }

    #[test]
    fn items_past_capacity_are_dropped() {
        let g = geometry(300, 300, 48);
        let pass = layout_pass(&g, std::iter::repeat_n(ItemState::Visible, 11));
        assert_eq!(pass.placements.len(), 8);
        assert_eq!(pass.dropped, 3);
        assert!(pass.get(8).is_none());
    }
}
