//! Player state: private zones and turn counters.

pub mod state;

pub use state::{Player, HAND_SIZE};
