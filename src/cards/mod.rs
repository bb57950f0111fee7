//! Card system: immutable card values and the static catalog.
//!
//! ## Key Types
//!
//! - `Card`: immutable `Copy` value for one card
//! - `CardClass`: Treasure / Victory / Action tag
//! - `ActionProfile` / `SpecialEffect`: data describing what an action card
//!   does when played (interpreted by the turn engine)
//! - `CardType` / `Catalog`: static registry of the fixed 18-card set

pub mod card;
pub mod catalog;

pub use card::{ActionProfile, Card, CardClass, CardKind, GainDestination, SpecialEffect};
pub use catalog::{Catalog, CardType};
