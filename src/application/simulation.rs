use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{Command, EditController, Outcome, SimulationClock};
use crate::config::{InitialFill, SimulationConfig};
use crate::domain::{Grid, RULESTRING, advance};
use crate::error::Result;

/// Simulation orchestrates one run: the current grid, the clock that
/// gates advances, and (in the interactive variant) the edit controller.
pub struct Simulation {
    grid: Grid,
    clock: SimulationClock,
    controller: Option<EditController>,
    generation: u64,
}

impl Simulation {
    /// Build a simulation whose clock starts at `now`.
    /// Invalid configurations fail here, before anything runs.
    pub fn new(config: &SimulationConfig, now: Instant) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(wall_clock_seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = match config.initial_fill {
            InitialFill::Empty => Grid::all_dead(config.width, config.height),
            InitialFill::Random => Grid::random_with(config.width, config.height, &mut rng),
        };
        let clock = SimulationClock::new(config.fps, config.start_paused, now)?;
        let controller = config
            .editing
            .then(|| EditController::new(seed.wrapping_add(1)));

        info!(
            rule = RULESTRING,
            width = config.width,
            height = config.height,
            fps = config.fps,
            paused = config.start_paused,
            fill = ?config.initial_fill,
            editing = config.editing,
            seed,
            "Simulation created"
        );

        Ok(Self {
            grid,
            clock,
            controller,
            generation: 0,
        })
    }

    /// Read-only view of the current generation
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn accepts_edits(&self) -> bool {
        self.controller.is_some()
    }

    /// Apply a single command. Ignored when editing is disabled.
    pub fn apply(&mut self, command: Command) -> Option<Outcome> {
        let controller = self.controller.as_mut()?;
        let outcome = controller.apply(command, &mut self.grid, &mut self.clock);
        if outcome == Outcome::GridReplaced {
            self.generation = 0;
        }
        Some(outcome)
    }

    /// Run one tick: commands in order, then the clock, then maybe an
    /// advance. Returns true if a new generation was produced.
    pub fn step<I>(&mut self, now: Instant, commands: I) -> bool
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            if self.apply(command).is_none() {
                debug!(?command, "Editing disabled, command ignored");
            }
        }

        if !self.clock.tick(now) {
            return false;
        }

        self.grid = advance(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "Generation advanced"
        );
        true
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::presets;
    use crate::error::LifeError;

    const NO_COMMANDS: [Command; 0] = [];

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = SimulationConfig::default().with_size(0, 10);
        let err = Simulation::new(&config, Instant::now()).err().unwrap();
        assert!(matches!(err, LifeError::InvalidConfiguration { .. }));

        let config = SimulationConfig::default().with_fps(0.0);
        assert!(Simulation::new(&config, Instant::now()).is_err());
    }

    #[test]
    fn test_initial_fill() {
        let empty = SimulationConfig::default().with_fill(InitialFill::Empty).with_size(8, 9);
        let sim = Simulation::new(&empty, Instant::now()).unwrap();
        assert!(sim.grid().is_empty());
        assert_eq!(sim.grid().dimensions(), (8, 9));

        let random = SimulationConfig::default().with_fill(InitialFill::Random).with_seed(11);
        let a = Simulation::new(&random, Instant::now()).unwrap();
        let b = Simulation::new(&random, Instant::now()).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert!(!a.grid().is_empty());
    }

    #[test]
    fn test_paused_start_does_not_advance() {
        let start = Instant::now();
        let config = SimulationConfig::default().with_seed(1).with_paused(true);
        let mut sim = Simulation::new(&config, start).unwrap();
        let before = sim.grid().clone();

        assert!(!sim.step(start + ms(1_000), NO_COMMANDS));
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_running_start_advances_on_schedule() {
        let start = Instant::now();
        let config = SimulationConfig::animated().with_seed(2).with_fps(10.0);
        let mut sim = Simulation::new(&config, start).unwrap();
        let first = sim.grid().clone();

        assert!(!sim.step(start + ms(50), NO_COMMANDS));
        assert!(sim.step(start + ms(101), NO_COMMANDS));
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid(), &advance(&first));
    }

    #[test]
    fn test_commands_apply_before_tick() {
        let start = Instant::now();
        let config = SimulationConfig::interactive()
            .with_fill(InitialFill::Empty)
            .with_size(10, 10)
            .with_seed(3);
        let mut sim = Simulation::new(&config, start).unwrap();

        // Unpausing in the same tick lets the advance happen right away
        let mut seeded = Grid::all_dead(10, 10);
        presets::blinker().place_on(&mut seeded, 3, 3).unwrap();
        let clicks: Vec<_> = seeded
            .live_cells()
            .into_iter()
            .map(|(r, c)| Command::set_cell((r as f32 + 0.5) / 10.0, (c as f32 + 0.5) / 10.0, true))
            .collect();

        let advanced = sim.step(start + ms(200), clicks.into_iter().chain([Command::TogglePause]));
        assert!(advanced);
        assert!(!sim.is_paused());
        assert_eq!(sim.grid(), &advance(&seeded));
    }

    #[test]
    fn test_randomize_then_clear_resets() {
        let start = Instant::now();
        let config = SimulationConfig::interactive().with_seed(4).with_paused(false);
        let mut sim = Simulation::new(&config, start).unwrap();
        assert!(sim.step(start + ms(101), NO_COMMANDS));
        assert_eq!(sim.generation(), 1);

        sim.step(start + ms(102), [Command::Randomize, Command::ClearAll]);
        assert!(sim.grid().is_empty());
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_commands_ignored_without_editing() {
        let start = Instant::now();
        let config = SimulationConfig::static_board().with_seed(5);
        let mut sim = Simulation::new(&config, start).unwrap();
        assert!(!sim.accepts_edits());

        assert_eq!(sim.apply(Command::set_cell(0.5, 0.5, true)), None);
        sim.step(start + ms(500), [Command::TogglePause, Command::Randomize]);
        assert!(sim.is_paused());
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn test_dimensions_survive_many_generations() {
        let start = Instant::now();
        let config = SimulationConfig::animated().with_size(13, 7).with_seed(6);
        let mut sim = Simulation::new(&config, start).unwrap();
        for i in 1..=20u64 {
            sim.step(start + ms(101 * i + i), NO_COMMANDS);
        }
        assert_eq!(sim.generation(), 20);
        assert_eq!(sim.grid().dimensions(), (13, 7));
    }
}
