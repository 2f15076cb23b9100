//! Rendering boundary between the game core and a display surface.

use crate::game::Player;

/// Callbacks a display surface implements to mirror the game.
///
/// The session drives these after every accepted move; implementations own
/// all drawing concerns (grids, marks, win lines, status text) and hold no
/// game logic. `Send` is required because the deferred bot move fires the
/// callbacks from a runtime worker.
pub trait Renderer: Send {
    /// A mark was placed at the given index (0-8).
    fn on_cell_marked(&mut self, pos: usize, player: Player);

    /// The game ended with a completed line between these two indices.
    fn on_win_line_determined(&mut self, first: usize, last: usize);

    /// The status text changed (turn indicator or final result).
    fn on_status_changed(&mut self, text: &str);

    /// The mode's stored history changed (loaded at start, appended on
    /// game end). Entries are ordered most recent first.
    fn on_history_changed(&mut self, entries: &[String]);
}
