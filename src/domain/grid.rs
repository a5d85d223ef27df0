use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::error::{LifeError, Result};

/// Grid holds the boolean cell matrix for one generation.
///
/// Rows run along the width and columns along the height, so a cell is
/// addressed as `(row, col)` with `row < width` and `col < height`.
/// Dimensions are fixed for the lifetime of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn all_dead(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid where each cell is alive with probability 0.5.
    /// The same seed always yields the same grid.
    pub fn random(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random_with(width, height, &mut rng)
    }

    /// Randomize from an existing generator (used by the edit controller,
    /// which keeps one generator for the whole run)
    pub fn random_with<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let cells = (0..width * height).map(|_| rng.random_bool(0.5)).collect();
        Self { width, height, cells }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let cells = (0..width)
            .flat_map(|row| (0..height).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();
        Self { width, height, cells }
    }

    /// Build a grid from a list of live coordinates
    pub fn from_cells(width: usize, height: usize, alive: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::all_dead(width, height);
        for &(row, col) in alive {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.height + col
    }

    const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.width && col < self.height
    }

    /// Cell state at (row, col). Anything off the grid reads as dead.
    pub fn get(&self, row: isize, col: isize) -> bool {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if self.in_bounds(r, c) => self.cells[self.index(r, c)],
            _ => false,
        }
    }

    /// Set the cell at (row, col) in place
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        if !self.in_bounds(row, col) {
            return Err(LifeError::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = alive;
        Ok(())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Iterate over all cells as (row, col, alive), row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| (idx / self.height, idx % self.height, alive))
    }

    /// Coordinates of every live cell
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(row, col, _)| (row, col))
            .collect()
    }
}
