//! Snapshot history with a movable cursor.
//!
//! A `Timeline` holds every board of the current branch, starting from the
//! empty board, plus the index of the snapshot being viewed. Jumping only
//! moves the cursor; pushing a new board from an earlier cursor truncates
//! the abandoned future first.
//!
//! Boards are stored in an `im::Vector` so cloning a timeline (for example
//! to hand a copy to a simulation) is O(1).

use im::Vector;

use crate::core::{Board, EngineError, Mark, Result};
use crate::rules::evaluate_status_with;

/// Board snapshots of one game branch and the cursor into them.
///
/// Invariants:
/// - `boards` is never empty and `boards[0]` is the empty board
/// - `current < boards.len()`
///
/// Boards only enter through `from_boards`, which checks them, or through
/// the engine's own moves:
///
/// ```compile_fail
/// use tictactoe_engine::{Board, Timeline};
///
/// let mut timeline = Timeline::new();
/// timeline.push(Board::empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    boards: Vector<Board>,
    current: usize,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    /// A timeline holding only the empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boards: Vector::unit(Board::empty()),
            current: 0,
        }
    }

    /// Build a timeline from stored boards, checking every invariant.
    ///
    /// Each board must follow its predecessor by exactly one placement of
    /// the mark whose turn it was (`first` at even indices), and no board
    /// may follow a won or drawn one.
    pub fn from_boards(boards: Vec<Board>, current: usize, first: Mark) -> Result<Self> {
        let Some(start) = boards.first() else {
            return Err(EngineError::InconsistentHistory("history is empty".to_string()));
        };

        if *start != Board::empty() {
            return Err(EngineError::InconsistentHistory(
                "history does not start from the empty board".to_string(),
            ));
        }

        for (index, pair) in boards.windows(2).enumerate() {
            if evaluate_status_with(&pair[0], first).is_over() {
                return Err(EngineError::InconsistentHistory(format!(
                    "move #{} played after the game ended",
                    index + 1
                )));
            }

            let expected = Mark::for_ply(index, first);
            match pair[1].diff(&pair[0]) {
                Some(placement) if placement.mark == expected => {}
                Some(placement) => {
                    return Err(EngineError::InconsistentHistory(format!(
                        "move #{} placed {} but it was {}'s turn",
                        index + 1,
                        placement.mark,
                        expected
                    )));
                }
                None => {
                    return Err(EngineError::InconsistentHistory(format!(
                        "move #{} is not a single placement",
                        index + 1
                    )));
                }
            }
        }

        if current >= boards.len() {
            return Err(EngineError::InvalidMoveIndex {
                index: current,
                len: boards.len(),
            });
        }

        Ok(Self {
            boards: boards.into_iter().collect(),
            current,
        })
    }

    /// Number of snapshots (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Index of the snapshot being viewed.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_board(&self) -> Board {
        self.boards[self.current]
    }

    /// Check if the cursor is on the last snapshot.
    #[must_use]
    pub fn is_at_latest(&self) -> bool {
        self.current + 1 == self.boards.len()
    }

    /// Snapshot at `index`.
    pub fn board_at(&self, index: usize) -> Result<Board> {
        self.boards
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidMoveIndex {
                index,
                len: self.boards.len(),
            })
    }

    /// Move the cursor. Nothing is discarded.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.boards.len() {
            return Err(EngineError::InvalidMoveIndex {
                index,
                len: self.boards.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Drop every snapshot after the cursor, append `board`, and move the
    /// cursor onto it. Returns the number of snapshots discarded.
    pub(crate) fn push(&mut self, board: Board) -> usize {
        let discarded = self.boards.len() - (self.current + 1);
        self.boards.truncate(self.current + 1);
        self.boards.push_back(board);
        self.current = self.boards.len() - 1;
        discarded
    }

    /// Back to the single empty board.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Copy the snapshots out, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Board> {
        self.boards.iter().copied().collect()
    }
}
