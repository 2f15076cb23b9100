//! Noughts - two-mode tic-tac-toe engine
//!
//! Board model, turn-alternating state machine, win/draw evaluation, a
//! uniform-random bot, and a per-mode capped result history persisted
//! through an injected key-value store. Rendering is a trait boundary so
//! the game logic runs headless.
//!
//! # Architecture
//!
//! - **Game**: board, rules, and the move state machine
//! - **Session**: turn controller wiring a game to a renderer and history
//! - **Bot**: random legal-move opponent for [`Mode::PlayerVsBot`]
//! - **History**: append-and-cap result log behind a [`KeyValueStore`]
//!
//! # Example
//!
//! ```
//! use noughts::{Game, GameStatus, Mode, Player};
//!
//! # fn main() -> Result<(), noughts::MoveError> {
//! let mut game = Game::with_first_player(Mode::PlayerVsPlayer, Player::X);
//! game.make_move(4)?;
//! assert_eq!(game.state().current_player(), Player::O);
//! assert_eq!(game.state().status(), &GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod bot;
mod game;
mod history;
mod render;
mod session;

// Crate-level exports - Game types
pub use game::{
    Board, Game, GameState, GameStatus, Mode, MoveError, Outcome, Player, Square, WinLine,
    check_winner, evaluate, is_full,
};

// Crate-level exports - Bot
pub use bot::RandomBot;

// Crate-level exports - History
pub use history::{
    FileStore, HISTORY_CAP, HistoryEntry, HistoryLog, KeyValueStore, MemoryStore, StoreError,
};

// Crate-level exports - Rendering boundary
pub use render::Renderer;

// Crate-level exports - Session management
pub use session::MatchSession;
