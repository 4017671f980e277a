//! # tictactoe-engine
//!
//! A game state engine for tic-tac-toe with time travel.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not undo logs**: every move appends a complete board to
//!    the history. Jumping to any earlier snapshot is just moving a cursor.
//!
//! 2. **Derived turn order**: the player to move at history index `i` is
//!    decided by `i mod 2` alone, never stored per move.
//!
//! 3. **Passive engine**: no I/O, no threads. A renderer pulls a
//!    `ViewState` or subscribes an observer; an input source calls
//!    `apply_move` and `jump_to`.
//!
//! ## Error Model
//!
//! Out-of-range cell or history indices are `EngineError`s. Moves onto an
//! occupied cell or a finished board are ignored without error and leave
//! the history untouched.
//!
//! ## Modules
//!
//! - `core`: marks, cells, boards, configuration, errors, RNG
//! - `rules`: winning lines and board status
//! - `history`: snapshot timeline and move list
//! - `engine`: the `Game` engine, views, observers, snapshots
//! - `play`: random players for simulations and tests
//!
//! ## Quick Start
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Mark::X));
//!
//! let labels: Vec<_> = game.list_moves().map(|m| m.label).collect();
//! assert_eq!(labels[0], "game start");
//! assert_eq!(labels[5], "move #5");
//! ```

pub mod core;
pub mod rules;
pub mod history;
pub mod engine;
pub mod play;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, CellIndex, Placement, Mark,
    EngineConfig, EngineError, Result,
    GameRng,
};

pub use crate::rules::{evaluate_status, evaluate_status_with, winning_line, GameStatus, Line};

pub use crate::history::{MoveDescriptor, MoveList, Timeline};

pub use crate::engine::{
    Game, GameSnapshot, IgnoreReason, MoveOutcome,
    ObserverId, ViewObserver, ViewState,
};

pub use crate::play::{play_out, wander, MovePolicy, RandomPlayer};
