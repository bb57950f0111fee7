//! Zone system: ordered card containers and the shared supply.
//!
//! ## Key Types
//!
//! - `Zone`: ordered card container addressed by positional identifiers
//! - `transfer`: the remove-then-add compound move between two zones
//! - `Supply` / `SupplyPile`: the purchasable piles, base + kingdom
//! - `KingdomSetup`: how the 10 kingdom piles are chosen

pub mod supply;
pub mod zone;

pub use supply::{KingdomSetup, Supply, SupplyPile, KINGDOM_PILES};
pub use zone::{transfer, Zone};
