//! Saved games.
//!
//! A `GameSnapshot` captures the configuration, every board of the current
//! branch, and the cursor. It is plain serde data; `to_bytes`/`from_bytes`
//! use bincode for a compact encoding. Snapshots are validated when they
//! are turned back into a game, never trusted as-is.

use serde::{Deserialize, Serialize};

use crate::core::{Board, EngineConfig, EngineError, Result};

/// Serializable copy of a game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: EngineConfig,
    pub boards: Vec<Board>,
    pub current: usize,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(EngineError::Encode)
    }

    /// Decode bytes produced by `to_bytes`.
    ///
    /// Only decodes; history invariants are checked on restore.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(EngineError::Decode)
    }
}
