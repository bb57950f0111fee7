//! Core engine primitives.
//!
//! Currently just the deterministic RNG; everything else with game meaning
//! lives in the domain modules (`cards`, `zones`, `players`, `engine`).

pub mod rng;

pub use rng::GameRng;
