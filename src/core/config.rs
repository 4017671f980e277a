//! Engine configuration.
//!
//! `EngineConfig` decides who moves first and how the move list is labeled.
//! Everything else about the game (board size, winning lines) is fixed.

use serde::{Deserialize, Serialize};

use super::player::Mark;

/// Label of the first entry in the move list.
pub const DEFAULT_START_LABEL: &str = "game start";

/// Prefix of every later entry in the move list; the move number follows.
pub const DEFAULT_MOVE_LABEL_PREFIX: &str = "move #";

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mark that moves at even history indices.
    pub first_mark: Mark,

    /// Label for history index 0.
    pub start_label: String,

    /// Label prefix for history index `i > 0`.
    pub move_label_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            first_mark: Mark::X,
            start_label: DEFAULT_START_LABEL.to_string(),
            move_label_prefix: DEFAULT_MOVE_LABEL_PREFIX.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mark that moves first.
    #[must_use]
    pub fn with_first_mark(mut self, mark: Mark) -> Self {
        self.first_mark = mark;
        self
    }

    /// Set the label for the starting position.
    #[must_use]
    pub fn with_start_label(mut self, label: impl Into<String>) -> Self {
        self.start_label = label.into();
        self
    }

    /// Set the prefix for numbered moves.
    #[must_use]
    pub fn with_move_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.move_label_prefix = prefix.into();
        self
    }

    /// Label for history index `index`.
    #[must_use]
    pub fn label_for(&self, index: usize) -> String {
        if index == 0 {
            self.start_label.clone()
        } else {
            format!("{}{}", self.move_label_prefix, index)
        }
    }

    /// Mark to move at history index `index`.
    #[must_use]
    pub const fn mover_at(&self, index: usize) -> Mark {
        Mark::for_ply(index, self.first_mark)
    }
}
