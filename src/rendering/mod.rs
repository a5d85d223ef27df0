use macroquad::prelude::*;

use crate::application::Simulation;
use crate::config::DisplayConfig;
use crate::domain::Grid;

/// Screen position of the top-left corner of cell (row, col)
pub fn cell_origin(display: &DisplayConfig, row: usize, col: usize) -> (f32, f32) {
    (row as f32 * display.pitch(), col as f32 * display.pitch())
}

/// Draw every cell as a colored block
pub fn draw_grid(grid: &Grid, display: &DisplayConfig) {
    for (row, col, alive) in grid.iter_cells() {
        let (x, y) = cell_origin(display, row, col);
        let color = if alive { display.alive_color } else { display.dead_color };
        draw_rectangle(x, y, display.cell_size, display.cell_size, color);
    }
}

/// Draw the status line below the board
pub fn draw_status(sim: &Simulation, display: &DisplayConfig) {
    let (width, height) = sim.grid().dimensions();
    let (_, board_height) = display.board_extent(width, height);

    let status = if sim.is_paused() { "Paused" } else { "Running" };
    let mut line = format!(
        "{} | Generation: {} | Alive: {}",
        status,
        sim.generation(),
        sim.grid().population()
    );
    if sim.accepts_edits() {
        line.push_str(" | LMB: Paint  RMB: Erase  Space: Play  R: Random  C: Clear");
    }

    draw_text(&line, 4.0, board_height + 20.0, 18.0, BLACK);
}

/// Draw one full frame
pub fn draw_frame(sim: &Simulation, display: &DisplayConfig) {
    clear_background(display.background);
    draw_grid(sim.grid(), display);
    draw_status(sim, display);
}
