//! Board evaluation: winner, draw or in progress.
//!
//! Evaluation is a pure function of a board (plus the configured first
//! mark, which only decides whose turn it is on an unfinished board).

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, CellIndex, Mark};

/// A line of three cells.
pub type Line = [CellIndex; 3];

const fn line(a: usize, b: usize, c: usize) -> Line {
    [CellIndex::from_const(a), CellIndex::from_const(b), CellIndex::from_const(c)]
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [Line; 8] = [
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    line(0, 4, 8),
    line(2, 4, 6),
];

/// Status of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A line of three has been completed.
    Winner(Mark),
    /// Every cell is occupied and nobody won.
    Draw,
    /// Play continues; the mark is the player to move.
    InProgress(Mark),
}

impl GameStatus {
    /// Won or drawn.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// The winner, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Winner(mark) => Some(mark),
            _ => None,
        }
    }

    /// The player to move, if the game is still going.
    #[must_use]
    pub const fn next_mark(self) -> Option<Mark> {
        match self {
            GameStatus::InProgress(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// First completed line on the board, checked rows, columns, diagonals.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Marked(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some((mark, [a, b, c]))
        }
        _ => None,
    })
}

/// Evaluate a board, with `first` moving on even move counts.
#[must_use]
pub fn evaluate_status_with(board: &Board, first: Mark) -> GameStatus {
    if let Some((mark, _)) = winning_line(board) {
        return GameStatus::Winner(mark);
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(Mark::for_ply(board.occupied_count(), first))
    }
}

/// Evaluate a board where X moves first.
///
/// ```
/// use tictactoe_engine::core::{Board, CellIndex, Mark};
/// use tictactoe_engine::rules::{evaluate_status, GameStatus};
///
/// let board = Board::empty().with_mark(CellIndex::new(0).unwrap(), Mark::X);
/// assert_eq!(evaluate_status(&board), GameStatus::InProgress(Mark::O));
/// ```
#[must_use]
pub fn evaluate_status(board: &Board) -> GameStatus {
    evaluate_status_with(board, Mark::X)
}
