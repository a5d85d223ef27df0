use std::time::Instant;

use macroquad::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

use life_core::{DisplayConfig, Simulation, SimulationConfig, input, rendering};

fn window_conf() -> Conf {
    let display = DisplayConfig::default();
    Conf {
        window_title: display.title,
        window_width: display.window_width,
        window_height: display.window_height,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let display = DisplayConfig::default();
    let config = SimulationConfig::interactive();

    let mut sim = match Simulation::new(&config, Instant::now()) {
        Ok(sim) => sim,
        Err(e) => {
            error!(error = %e, "Failed to start simulation");
            std::process::exit(1);
        }
    };

    loop {
        let board = sim.grid().dimensions();
        let commands = input::poll_commands(&display, board);

        sim.step(Instant::now(), commands);

        rendering::draw_frame(&sim, &display);

        next_frame().await;
    }
}
