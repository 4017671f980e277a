//! Everything a renderer needs to draw one frame.

use serde::{Deserialize, Serialize};

use crate::core::Board;
use crate::history::MoveDescriptor;
use crate::rules::{GameStatus, Line};

/// Snapshot of the engine as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Board at the current history index.
    pub board: Board,

    /// Status of that board.
    pub status: GameStatus,

    /// One entry per history snapshot.
    pub moves: Vec<MoveDescriptor>,

    pub current_index: usize,

    /// Completed line to highlight, when the current board is won.
    pub winning_line: Option<Line>,
}

impl ViewState {
    /// Status line text, e.g. "Next player: X" or "Winner: O".
    #[must_use]
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}
