//! Win detection logic.

use super::super::types::{Board, Player, Square, WinLine};
use tracing::instrument;

/// The 8 ways to complete a line, checked in this exact order.
///
/// Rows, then columns, then diagonals; the first match wins. Only one line
/// can complete per move under legal play, so the order is a deterministic
/// tie-break rather than an observable behavior.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the completed triple's outer
/// endpoints, or `None` if no line is complete.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            if let Some(Square::Occupied(player)) = sq {
                return Some((player, WinLine { first: a, last: c }));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.place(pos, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        let (winner, line) = check_winner(&board).unwrap();
        assert_eq!(winner, Player::X);
        assert_eq!(line, WinLine { first: 0, last: 2 });
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[(1, Player::O), (4, Player::O), (7, Player::O)]);
        let (winner, line) = check_winner(&board).unwrap();
        assert_eq!(winner, Player::O);
        assert_eq!(line, WinLine { first: 1, last: 7 });
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let (winner, line) = check_winner(&board).unwrap();
        assert_eq!(winner, Player::O);
        assert_eq!(line, WinLine { first: 2, last: 6 });
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_declared_line_reported() {
        // Top row and left column both complete; the row is declared first.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        let (_, line) = check_winner(&board).unwrap();
        assert_eq!(line, WinLine { first: 0, last: 2 });
    }
}
