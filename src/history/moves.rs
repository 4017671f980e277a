//! Move list descriptors.
//!
//! A `MoveList` walks the timeline and yields one `MoveDescriptor` per
//! snapshot. It borrows the timeline and holds no state of its own, so a
//! fresh list (or a clone of a partially consumed one) always reflects the
//! history as it is now.

use serde::{Deserialize, Serialize};

use super::timeline::Timeline;
use crate::core::{Board, EngineConfig, Placement};

/// One entry of the move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History index this entry jumps to.
    pub index: usize,

    /// "game start" for index 0, "move #i" otherwise.
    pub label: String,

    /// The mark placed to reach this snapshot (`None` at game start).
    pub placement: Option<Placement>,

    /// Whether this is the snapshot currently viewed.
    pub is_current: bool,
}

/// Ordered, restartable iterator over the move list.
#[derive(Clone)]
pub struct MoveList<'a> {
    timeline: &'a Timeline,
    config: &'a EngineConfig,
    next: usize,
    prev_board: Board,
}

impl<'a> MoveList<'a> {
    pub(crate) fn new(timeline: &'a Timeline, config: &'a EngineConfig) -> Self {
        Self {
            timeline,
            config,
            next: 0,
            prev_board: Board::empty(),
        }
    }
}

impl Iterator for MoveList<'_> {
    type Item = MoveDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        let board = self.timeline.board_at(index).ok()?;

        let placement = if index == 0 {
            None
        } else {
            board.diff(&self.prev_board)
        };

        self.next += 1;
        self.prev_board = board;

        Some(MoveDescriptor {
            index,
            label: self.config.label_for(index),
            placement,
            is_current: index == self.timeline.current_index(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.timeline.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveList<'_> {}
