/// Rulestring of the only supported automaton
pub const RULESTRING: &str = "B3/S23";

/// Conway's Game of Life (B3/S23).
///
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_state(alive_now: bool, live_neighbors: u8) -> bool {
    matches!((alive_now, live_neighbors), (true, 2 | 3) | (false, 3))
}
