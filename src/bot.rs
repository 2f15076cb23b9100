//! Random bot opponent.

use crate::game::Board;
use rand::seq::IteratorRandom;
use tracing::{debug, instrument};

/// Bot that picks uniformly among the empty squares.
///
/// No search or lookahead; every legal move is equally likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomBot;

impl RandomBot {
    /// Creates a new random bot.
    pub fn new() -> Self {
        Self
    }

    /// Chooses an empty square, or `None` if the board is full.
    ///
    /// The controller never asks for a move on a full or finished board, so
    /// `None` indicates a sequencing bug in the caller.
    #[instrument(skip_all)]
    pub fn choose_move(&self, board: &Board) -> Option<usize> {
        let pick = (0..9)
            .filter(|&pos| board.is_empty(pos))
            .choose(&mut rand::rng());
        debug!(?pick, "bot selected square");
        pick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_bot_targets_empty_square() {
        let bot = RandomBot::new();
        let mut board = Board::new();
        board.place(0, Player::X).unwrap();
        board.place(4, Player::O).unwrap();
        board.place(8, Player::X).unwrap();

        for _ in 0..100 {
            let pos = bot.choose_move(&board).unwrap();
            assert!(board.is_empty(pos), "bot chose occupied square {pos}");
        }
    }

    #[test]
    fn test_bot_takes_last_square() {
        let bot = RandomBot::new();
        let mut board = Board::new();
        for pos in 0..8 {
            let player = if pos % 2 == 0 { Player::X } else { Player::O };
            board.place(pos, player).unwrap();
        }

        assert_eq!(bot.choose_move(&board), Some(8));
    }

    #[test]
    fn test_bot_none_on_full_board() {
        let bot = RandomBot::new();
        let mut board = Board::new();
        for pos in 0..9 {
            let player = if pos % 2 == 0 { Player::X } else { Player::O };
            board.place(pos, player).unwrap();
        }

        assert_eq!(bot.choose_move(&board), None);
    }
}
