//! Game rules for the 3x3 board.
//!
//! - Eight winning lines (rows, columns, diagonals)
//! - Draw when the board fills without a line
//! - Otherwise the player to move follows from move-count parity
//!
//! Everything here is pure; the engine calls into it after every change.

pub mod status;

pub use status::{evaluate_status, evaluate_status_with, winning_line, GameStatus, Line, WINNING_LINES};
