//! # dominion-core
//!
//! A deck-building card game engine: turn phases, card effects, zones,
//! a shared supply, and end-of-game scoring.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Data**: A card is an immutable value describing its
//!    grants and scripted effect. The turn engine interprets it; cards
//!    hold no logic of their own.
//!
//! 2. **Headless**: The engine never reads input or prints. Every choice
//!    goes through a [`DecisionProvider`]; frontends and tests supply one
//!    per player.
//!
//! 3. **Deterministic**: All randomness flows through one seeded
//!    [`GameRng`], so a full game replays exactly from its seed.
//!
//! 4. **Validate and Re-Prompt**: Invalid selections never mutate state;
//!    the engine asks the same provider again. Pass and Quit are ordinary
//!    values, not errors.
//!
//! ## Modules
//!
//! - `core`: Seeded RNG
//! - `cards`: Card values and the catalog of standard cards
//! - `zones`: Ordered card containers and the shared supply
//! - `players`: Per-player zones and turn counters
//! - `decision`: The provider seam between engine and presentation
//! - `engine`: The three-phase turn machine and effect interpreter
//! - `game`: Whole-game setup, the round-robin loop, and scoring
//! - `errors`: Validation errors

pub mod cards;
pub mod core;
pub mod decision;
pub mod engine;
pub mod errors;
pub mod game;
pub mod players;
pub mod zones;

// Re-export commonly used types
pub use crate::core::GameRng;

pub use crate::cards::{
    ActionProfile, Card, CardClass, CardKind, CardType, Catalog, GainDestination, SpecialEffect,
};

pub use crate::zones::{transfer, KingdomSetup, Supply, SupplyPile, Zone};

pub use crate::players::{Player, HAND_SIZE};

pub use crate::decision::{Choice, DecisionProvider, ScriptedDecisions};

pub use crate::engine::{run_turn, Flow, GameContext};

pub use crate::game::{Game, GameBuilder, GameOutcome, Scoreboard, Standing};

pub use crate::errors::GameError;
