//! Generation engine: computes the successor of a grid.
//!
//! Every cell is re-evaluated each generation against a bounded board.
//! Neighbors that fall off the edge read as dead; there is no wraparound.

use super::{Grid, rules::next_state};

/// The eight neighbor offsets as (row, col) deltas
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live neighbors of (row, col), treating off-grid cells as dead
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    // Grid dimensions come from a Vec allocation, so they fit in isize.
    let (r, c) = (row as isize, col as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dr, dc)| u8::from(grid.get(r.wrapping_add(dr), c.wrapping_add(dc))))
        .sum()
}

/// Pure functional evolution - returns a new grid of the same dimensions
/// and leaves the input untouched
pub fn advance(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    Grid::from_fn(width, height, |row, col| {
        let alive = grid.get(row as isize, col as isize);
        next_state(alive, live_neighbors(grid, row, col))
    })
}
