mod grid;
mod rules;
mod generation;
mod patterns;

pub use grid::Grid;
pub use rules::{next_state, RULESTRING};
pub use generation::{advance, live_neighbors, NEIGHBOR_OFFSETS};
pub use patterns::{Pattern, presets};
