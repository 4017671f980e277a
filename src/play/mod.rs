//! Automated play for simulations, tests and benchmarks.
//!
//! Nothing in the engine depends on this module; it drives a `Game` through
//! the same public operations a renderer would use.

pub mod random;

pub use random::{play_out, wander, MovePolicy, RandomPlayer};
