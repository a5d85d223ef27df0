use macroquad::prelude::*;

use crate::application::Command;
use crate::config::DisplayConfig;

/// Normalize a screen position against the board's pixel extent
pub fn pointer_fraction(display: &DisplayConfig, board: (usize, usize), mouse_pos: (f32, f32)) -> (f32, f32) {
    let (extent_x, extent_y) = display.board_extent(board.0, board.1);
    (mouse_pos.0 / extent_x, mouse_pos.1 / extent_y)
}

/// Translate this frame's mouse state into a paint command
pub fn mouse_command(display: &DisplayConfig, board: (usize, usize), mouse_pos: (f32, f32)) -> Option<Command> {
    let alive = if is_mouse_button_down(MouseButton::Left) {
        true
    } else if is_mouse_button_down(MouseButton::Right) {
        false
    } else {
        return None;
    };

    let (x, y) = pointer_fraction(display, board, mouse_pos);
    Some(Command::set_cell(x, y, alive))
}

/// Translate key presses into commands, in a fixed order
pub fn keyboard_commands() -> Vec<Command> {
    let bindings = [
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::R, Command::Randomize),
        (KeyCode::C, Command::ClearAll),
    ];

    bindings
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| command)
        .collect()
}

/// Gather every command for this frame
pub fn poll_commands(display: &DisplayConfig, board: (usize, usize)) -> Vec<Command> {
    let mut commands = keyboard_commands();
    commands.extend(mouse_command(display, board, mouse_position()));
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_fraction() {
        let display = DisplayConfig::default();
        // 10x5 board with a 12px pitch spans 120x60 pixels
        assert_eq!(pointer_fraction(&display, (10, 5), (60.0, 30.0)), (0.5, 0.5));
        assert_eq!(pointer_fraction(&display, (10, 5), (120.0, 0.0)), (1.0, 0.0));
    }

    #[test]
    fn test_pointer_maps_to_drawn_cell() {
        let display = DisplayConfig::default();
        // Inside the block drawn for cell (3, 2)
        let (x, y) = pointer_fraction(&display, (10, 5), (3.0 * 12.0 + 5.0, 2.0 * 12.0 + 5.0));
        assert_eq!(crate::application::cell_at(x, y, 10, 5), Some((3, 2)));
    }
}
