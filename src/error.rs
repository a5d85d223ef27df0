//! Error type shared by the simulation core.

/// Errors produced by grid edits and simulation construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    /// A write targeted a coordinate outside the grid.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// The simulation cannot be built from the given configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;
