//! Core domain types for the tic-tac-toe engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X.
    X,
    /// Player O (the bot's side in bot mode).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Opponent configuration, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two humans alternating at the same board.
    PlayerVsPlayer,
    /// Human as X or O against the random bot.
    PlayerVsBot,
}

impl Mode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "Player vs Player",
            Mode::PlayerVsBot => "Player vs Bot",
        }
    }

    /// Returns the persistence key for this mode's history log.
    ///
    /// The keys are fixed so a fresh build keeps reading logs written by
    /// earlier sessions.
    pub fn storage_key(self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "TTT_PVP_HISTORY",
            Mode::PlayerVsBot => "TTT_BOT_HISTORY",
        }
    }
}

/// Why a move was rejected.
///
/// A rejected move never mutates game state; callers may treat the error as
/// a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game already reached a terminal state.
    #[display("Game is already over")]
    Finished,
    /// The target index is not on the board.
    #[display("Position out of bounds (must be 0-8)")]
    OutOfBounds,
    /// The target square is already occupied.
    #[display("Square is already occupied")]
    Occupied,
}

/// 3x3 board, indexed 0-8 in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (row = index / 3, col = index % 3).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Places a player's mark at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index past the board and
    /// [`MoveError::Occupied`] for a non-empty target. The board is
    /// unchanged on error.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), MoveError> {
        if pos >= 9 {
            return Err(MoveError::OutOfBounds);
        }
        if self.squares[pos] != Square::Empty {
            return Err(MoveError::Occupied);
        }
        self.squares[pos] = Square::Occupied(player);
        Ok(())
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based index so a player can name a cell.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A completed three-in-a-row, reported by its outer endpoints.
///
/// The endpoints are the first and last index of the winning triple, in a
/// shape a renderer can draw a line through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// First index of the winning triple.
    pub first: usize,
    /// Last index of the winning triple.
    pub last: usize,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed triple's endpoints.
        line: WinLine,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the terminal outcome, or `None` while the game is ongoing.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } => Some(Outcome::Win(*winner)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Terminal result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The given player completed a line.
    Win(Player),
    /// The board filled with no line completed.
    Draw,
}

impl std::fmt::Display for Outcome {
    /// Renders the user-visible result text.
    ///
    /// These strings also appear verbatim in persisted history entries, so
    /// the wording is a compatibility contract.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} Wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Opponent configuration for this session.
    mode: Mode,
    /// Game status.
    status: GameStatus,
    /// Move history (indices played, in order).
    moves: Vec<usize>,
}

impl GameState {
    /// Creates a new game with the given starting player.
    pub fn new(mode: Mode, first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            mode,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the session's mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the indices played so far, in order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Places the current player's mark (validation only; status and turn
    /// are updated by the engine).
    pub(super) fn place(&mut self, pos: usize) -> Result<(), MoveError> {
        self.board.place(pos, self.current_player)?;
        self.moves.push(pos);
        Ok(())
    }

    /// Hands the turn to the opponent.
    pub(super) fn flip_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}
