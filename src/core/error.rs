//! Engine error types.
//!
//! Only precondition violations are errors. Moves that the rules simply
//! ignore (occupied cell, finished game) are reported through
//! `MoveOutcome::Ignored` instead, and never through this type.

/// Errors returned by engine operations.
///
/// Every error leaves the engine state exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Cell index outside `0..=8`.
    #[error("cell index {index} is out of range (expected 0..=8)")]
    InvalidCellIndex { index: usize },

    /// History index outside `0..len`.
    #[error("move index {index} is out of range (history has {len} snapshots)")]
    InvalidMoveIndex { index: usize, len: usize },

    /// A restored history breaks the one-placement-per-step rule.
    #[error("inconsistent history: {0}")]
    InconsistentHistory(String),

    /// Snapshot bytes could not be decoded.
    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),

    /// Snapshot could not be encoded.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),
}

impl EngineError {
    /// Check if the error is an out-of-range index of either kind.
    #[inline]
    #[must_use]
    pub fn is_invalid_index(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidCellIndex { .. } | EngineError::InvalidMoveIndex { .. }
        )
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidCellIndex { index: 9 };
        assert_eq!(err.to_string(), "cell index 9 is out of range (expected 0..=8)");

        let err = EngineError::InvalidMoveIndex { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "move index 5 is out of range (history has 3 snapshots)"
        );
    }

    #[test]
    fn test_is_invalid_index() {
        assert!(EngineError::InvalidCellIndex { index: 12 }.is_invalid_index());
        assert!(EngineError::InvalidMoveIndex { index: 1, len: 1 }.is_invalid_index());
        assert!(!EngineError::InconsistentHistory("x".into()).is_invalid_index());
    }
}
