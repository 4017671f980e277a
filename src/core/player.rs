//! Player marks.
//!
//! ## Mark
//!
//! The two players of the game are identified by the mark they place:
//! `X` and `O`. Which mark moves first is configurable (see `EngineConfig`),
//! after which turns strictly alternate.

use serde::{Deserialize, Serialize};

/// The mark a player places on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark to move after `ply` moves have been made.
    ///
    /// Turn order is derived purely from parity: `first` moves at even plies,
    /// its opponent at odd plies.
    ///
    /// ```
    /// use tictactoe_engine::core::Mark;
    ///
    /// assert_eq!(Mark::for_ply(0, Mark::X), Mark::X);
    /// assert_eq!(Mark::for_ply(1, Mark::X), Mark::O);
    /// assert_eq!(Mark::for_ply(4, Mark::O), Mark::O);
    /// ```
    #[must_use]
    pub const fn for_ply(ply: usize, first: Mark) -> Self {
        if ply % 2 == 0 {
            first
        } else {
            first.opponent()
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_for_ply_alternates() {
        for ply in 0..9 {
            let expected = if ply % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(Mark::for_ply(ply, Mark::X), expected);
            assert_eq!(Mark::for_ply(ply, Mark::O), expected.opponent());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Mark::X), "X");
        assert_eq!(format!("{}", Mark::O), "O");
    }

    #[test]
    fn test_mark_serialization() {
        let json = serde_json::to_string(&Mark::O).unwrap();
        let deserialized: Mark = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Mark::O);
    }
}
