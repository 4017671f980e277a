//! Game history: board snapshots and the move list built from them.
//!
//! - `Timeline`: snapshots plus the cursor, with branch truncation
//! - `MoveList`: one descriptor per snapshot, regenerated on demand

pub mod moves;
pub mod timeline;

pub use moves::{MoveDescriptor, MoveList};
pub use timeline::Timeline;
