//! Move validation and the game state machine.

use super::rules;
use super::types::{GameState, GameStatus, Mode, MoveError, Player};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns one [`GameState`] and sequences it through moves: in progress until
/// a line completes or the board fills, then terminal and immutable.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with a randomly chosen starting player.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        let first = if rand::random_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        debug!(?first, "starting player chosen");
        Self::with_first_player(mode, first)
    }

    /// Creates a new game with an explicit starting player.
    #[instrument]
    pub fn with_first_player(mode: Mode, first_player: Player) -> Self {
        Self {
            state: GameState::new(mode, first_player),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns true once the game reached a terminal status.
    pub fn is_over(&self) -> bool {
        self.state.status() != &GameStatus::InProgress
    }

    /// Makes a move at the given index (0-8) for the current player.
    ///
    /// On a non-terminal move the turn passes to the opponent; on a
    /// terminal move the status becomes absorbing and the turn stays with
    /// the mover.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over or the target square is
    /// invalid; the state is unchanged on error.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, pos: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::Finished);
        }

        self.state.place(pos)?;

        match rules::evaluate(self.state.board()) {
            GameStatus::InProgress => self.state.flip_turn(),
            terminal => {
                debug!(status = ?terminal, moves = self.state.moves().len(), "game finished");
                self.state.set_status(terminal);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::WinLine;
    use super::*;

    #[test]
    fn test_alternating_players() {
        let mut game = Game::with_first_player(Mode::PlayerVsPlayer, Player::X);
        assert_eq!(game.state().current_player(), Player::X);

        game.make_move(4).unwrap();
        assert_eq!(game.state().current_player(), Player::O);

        game.make_move(0).unwrap();
        assert_eq!(game.state().current_player(), Player::X);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::with_first_player(Mode::PlayerVsPlayer, Player::X);
        game.make_move(4).unwrap();

        let before = game.state().clone();
        assert_eq!(game.make_move(4), Err(MoveError::Occupied));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::with_first_player(Mode::PlayerVsPlayer, Player::X);
        assert_eq!(game.make_move(9), Err(MoveError::OutOfBounds));
    }

    #[test]
    fn test_win_sets_absorbing_status() {
        let mut game = Game::with_first_player(Mode::PlayerVsPlayer, Player::X);
        for pos in [0, 4, 1, 5, 2] {
            game.make_move(pos).unwrap();
        }

        assert_eq!(
            game.state().status(),
            &GameStatus::Won {
                winner: Player::X,
                line: WinLine { first: 0, last: 2 },
            }
        );
        // Winner keeps the turn; further moves are rejected without change.
        assert_eq!(game.state().current_player(), Player::X);
        assert_eq!(game.make_move(8), Err(MoveError::Finished));
    }
}
