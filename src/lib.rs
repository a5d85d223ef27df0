// Domain layer - grid, rule, and generation engine
pub mod domain;

// Application layer - clock, edit controller, and the simulation facade
pub mod application;

pub mod config;
pub mod error;

// Host collaborators - input polling and rendering
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{Command, EditController, Simulation, SimulationClock};
pub use config::{DisplayConfig, InitialFill, SimulationConfig};
pub use domain::{Grid, Pattern, advance, next_state, presets};
pub use error::{LifeError, Result};
