//! Core types: marks, cells, boards, configuration, errors, RNG.
//!
//! These are plain values with no knowledge of history or game flow.
//! The `rules`, `history` and `engine` modules build on them.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, CellIndex, Placement, CELL_COUNT, SIDE};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use player::Mark;
pub use rng::GameRng;
