//! The game state engine and its renderer-facing surface.
//!
//! - `Game`: history, cursor, move application, time travel
//! - `ViewState`: pull-style view of the current snapshot
//! - `ViewObserver`: push-style notification after every change
//! - `GameSnapshot`: validated save/restore

pub mod game;
pub mod observer;
pub mod snapshot;
pub mod view;

pub use game::{Game, IgnoreReason, MoveOutcome};
pub use observer::{ObserverId, ViewObserver};
pub use snapshot::GameSnapshot;
pub use view::ViewState;
