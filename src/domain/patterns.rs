use super::Grid;
use crate::error::{LifeError, Result};

/// A small pattern that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, rows, cols, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Fails without touching the grid if any cell would land off it.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> Result<()> {
        let (width, height) = grid.dimensions();
        let fits = |start: usize, extent: usize, limit: usize| {
            start.checked_add(extent).is_some_and(|end| end <= limit)
        };
        if !fits(row, self.rows, width) || !fits(col, self.cols, height) {
            return Err(LifeError::OutOfRange {
                row: row.saturating_add(self.rows.saturating_sub(1)),
                col: col.saturating_add(self.cols.saturating_sub(1)),
                width,
                height,
            });
        }
        // Every offset is below the extent checked above, so these sums fit
        for &(dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, true)?;
        }
        Ok(())
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![(1, 0), (1, 1), (1, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advance;

    #[test]
    fn test_pattern_extent() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        let toad = presets::toad();
        assert_eq!((toad.rows, toad.cols), (2, 4));
    }

    #[test]
    fn test_place_off_grid_leaves_grid_untouched() {
        let mut grid = Grid::all_dead(4, 4);
        let err = presets::glider().place_on(&mut grid, 2, 0).unwrap_err();
        assert!(matches!(err, LifeError::OutOfRange { .. }));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_place_at_huge_anchor_is_rejected() {
        let mut grid = Grid::all_dead(8, 8);
        let err = presets::blinker().place_on(&mut grid, usize::MAX, 0).unwrap_err();
        assert!(matches!(err, LifeError::OutOfRange { .. }));
        assert!(presets::block().place_on(&mut grid, 0, usize::MAX - 1).is_err());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut grid = Grid::all_dead(8, 8);
            pattern.place_on(&mut grid, 2, 2).unwrap();
            let once = advance(&grid);
            assert_ne!(once, grid, "{} should change", pattern.name);
            assert_eq!(advance(&once), grid, "{} should return", pattern.name);
        }
    }
}
