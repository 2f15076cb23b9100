//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to the rules. Evaluation
//! is separated from board storage so the engine and tests can share it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board into a game status.
///
/// A completed line wins; a full board with no line is a draw; anything
/// else is still in progress. Win and draw are mutually exclusive because
/// the line check runs first.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = check_winner(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{Player, Square};
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_win_takes_precedence_on_full_board() {
        let mut board = Board::new();
        // X X X / O O X / X O O - full board where X's top row wins
        let marks = [
            Player::X,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
        ];
        for (pos, player) in marks.into_iter().enumerate() {
            board.place(pos, player).unwrap();
        }
        assert!(board.squares().iter().all(|s| *s != Square::Empty));
        assert!(matches!(
            evaluate(&board),
            GameStatus::Won {
                winner: Player::X,
                ..
            }
        ));
    }
}
