use std::time::{Duration, Instant};

use tracing::info;

use crate::error::{LifeError, Result};

/// Time between advances for a rate of `fps` advances per second
pub fn frame_period_for(fps: f64) -> Result<Duration> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(LifeError::InvalidConfiguration {
            reason: format!("fps must be a positive number, got {fps}"),
        });
    }
    let period = Duration::try_from_secs_f64(1.0 / fps).map_err(|e| {
        LifeError::InvalidConfiguration {
            reason: format!("fps {fps} gives no usable frame period: {e}"),
        }
    })?;
    if period.is_zero() {
        return Err(LifeError::InvalidConfiguration {
            reason: format!("fps {fps} is too high"),
        });
    }
    Ok(period)
}

/// Frame-gated timer that decides when the next generation is due.
///
/// The clock only fires when polled. Firing resets the timer to the poll
/// time, so a late poll produces one advance and the missed time is dropped.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    last_advance: Instant,
    frame_period: Duration,
    paused: bool,
}

impl SimulationClock {
    /// Create a clock firing `fps` times per second, starting its timer at `now`
    pub fn new(fps: f64, paused: bool, now: Instant) -> Result<Self> {
        let frame_period = frame_period_for(fps)?;
        Ok(Self {
            last_advance: now,
            frame_period,
            paused,
        })
    }

    pub const fn frame_period(&self) -> Duration {
        self.frame_period
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip between running and paused
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!(paused = self.paused, "Pause toggled");
    }

    /// Returns true when a generation should advance at `now`
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }

        let elapsed = now.saturating_duration_since(self.last_advance);
        if elapsed > self.frame_period {
            self.last_advance = now;
            true
        } else {
            false
        }
    }
}
