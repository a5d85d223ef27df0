use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::SimulationClock;
use crate::domain::Grid;

/// A discrete edit or control request coming from the input collaborator
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Set the cell under a pointer. Positions are fractions of the board
    /// extent, so `(0.0, 0.0)` is the first cell and `1.0` is the far edge.
    SetCell { x_fraction: f32, y_fraction: f32, alive: bool },
    TogglePause,
    Randomize,
    ClearAll,
}

impl Command {
    pub const fn set_cell(x_fraction: f32, y_fraction: f32, alive: bool) -> Self {
        Self::SetCell { x_fraction, y_fraction, alive }
    }
}

/// What a command did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    CellSet { row: usize, col: usize },
    /// Pointer mapped outside the grid; nothing changed
    Discarded,
    PauseToggled,
    /// The grid was swapped for a new one
    GridReplaced,
}

/// Map a normalized pointer position onto a grid coordinate
pub fn cell_at(x_fraction: f32, y_fraction: f32, width: usize, height: usize) -> Option<(usize, usize)> {
    Some((axis_index(x_fraction, width)?, axis_index(y_fraction, height)?))
}

fn axis_index(fraction: f32, len: usize) -> Option<usize> {
    let scaled = (f64::from(fraction) * len as f64).floor();
    // NaN fails both comparisons
    (scaled >= 0.0 && scaled < len as f64).then(|| scaled as usize)
}

/// Turns commands into grid edits and clock changes
pub struct EditController {
    rng: StdRng,
}

impl EditController {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Apply one command. Grid-wide commands replace `grid` wholesale.
    pub fn apply(&mut self, command: Command, grid: &mut Grid, clock: &mut SimulationClock) -> Outcome {
        let (width, height) = grid.dimensions();

        match command {
            Command::SetCell { x_fraction, y_fraction, alive } => {
                let Some((row, col)) = cell_at(x_fraction, y_fraction, width, height) else {
                    debug!(x_fraction, y_fraction, "Edit outside grid discarded");
                    return Outcome::Discarded;
                };
                match grid.set(row, col, alive) {
                    Ok(()) => Outcome::CellSet { row, col },
                    Err(e) => {
                        debug!(error = %e, "Edit discarded");
                        Outcome::Discarded
                    }
                }
            }
            Command::TogglePause => {
                clock.toggle_pause();
                Outcome::PauseToggled
            }
            Command::Randomize => {
                *grid = Grid::random_with(width, height, &mut self.rng);
                info!(population = grid.population(), "Grid randomized");
                Outcome::GridReplaced
            }
            Command::ClearAll => {
                *grid = Grid::all_dead(width, height);
                info!("Grid cleared");
                Outcome::GridReplaced
            }
        }
    }
}
