//! Immutable configuration for the simulation core and its host window.

use macroquad::color::Color;

use crate::application::frame_period_for;
use crate::error::{LifeError, Result};

/// How the first grid is filled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InitialFill {
    #[default]
    Empty,
    Random,
}

/// Construction parameters for a [`crate::Simulation`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Generation advances per second
    pub fps: f64,
    pub start_paused: bool,
    pub initial_fill: InitialFill,
    /// Fixed RNG seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
    /// Whether edit commands are accepted
    pub editing: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            fps: 10.0,
            start_paused: true,
            initial_fill: InitialFill::Random,
            seed: None,
            editing: true,
        }
    }
}

impl SimulationConfig {
    /// A board that is drawn but never changes on its own
    pub fn static_board() -> Self {
        Self {
            start_paused: true,
            initial_fill: InitialFill::Empty,
            editing: false,
            ..Self::default()
        }
    }

    /// Random soup that starts evolving immediately
    pub fn animated() -> Self {
        Self {
            start_paused: false,
            initial_fill: InitialFill::Random,
            editing: false,
            ..Self::default()
        }
    }

    /// Paused random board that accepts edits and key commands
    pub fn interactive() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.start_paused = paused;
        self
    }

    pub fn with_fill(mut self, fill: InitialFill) -> Self {
        self.initial_fill = fill;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// Reject configurations no simulation can run with
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid("width must be greater than 0"));
        }
        if self.height == 0 {
            return Err(invalid("height must be greater than 0"));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(invalid(format!(
                "{}x{} grid has too many cells",
                self.width, self.height
            )));
        }
        frame_period_for(self.fps)?;
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> LifeError {
    LifeError::InvalidConfiguration { reason: reason.into() }
}

/// Window and drawing parameters for the host program
#[derive(Clone, Debug)]
pub struct DisplayConfig {
    pub title: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Side length of one cell in pixels
    pub cell_size: f32,
    /// Gap between neighboring cells in pixels
    pub padding: f32,
    pub background: Color,
    pub alive_color: Color,
    pub dead_color: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Game of life".to_owned(),
            window_width: 1024,
            window_height: 768,
            cell_size: 10.0,
            padding: 2.0,
            background: Color::from_rgba(135, 206, 235, 255), // Sky blue
            alive_color: Color::from_rgba(255, 0, 0, 255),
            dead_color: Color::from_rgba(255, 255, 255, 40),
        }
    }
}

impl DisplayConfig {
    /// Distance between the origins of two adjacent cells
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.padding
    }

    /// Pixel extent of a board with the given dimensions
    pub fn board_extent(&self, width: usize, height: usize) -> (f32, f32) {
        (width as f32 * self.pitch(), height as f32 * self.pitch())
    }
}
