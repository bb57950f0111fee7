//! Whole-game orchestration: setup, the round-robin loop, and scoring.

pub mod runner;
pub mod scoring;

pub use runner::{Game, GameBuilder, GameOutcome};
pub use scoring::{Scoreboard, Standing};
