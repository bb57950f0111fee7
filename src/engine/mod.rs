//! The turn engine.
//!
//! [`context`] holds the state a turn threads through, [`turn`] drives the
//! phase machine, and [`effects`] interprets played cards. The engine owns
//! no state of its own; everything it mutates arrives through
//! [`GameContext`].

pub mod context;
pub mod effects;
pub mod turn;

pub use context::{Flow, GameContext};
pub use turn::run_turn;
