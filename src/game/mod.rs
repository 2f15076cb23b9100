mod engine;
mod rules;
mod types;

pub use engine::Game;
pub use rules::{check_winner, evaluate, is_full};
pub use types::{Board, GameState, GameStatus, Mode, MoveError, Outcome, Player, Square, WinLine};
