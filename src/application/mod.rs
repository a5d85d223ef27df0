mod clock;
mod controller;
mod simulation;

pub use clock::{SimulationClock, frame_period_for};
pub use controller::{Command, EditController, Outcome, cell_at};
pub use simulation::Simulation;
