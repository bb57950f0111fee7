//! Error taxonomy for the game engine.
//!
//! Every variant here is a *validation* failure: the requested operation was
//! checked, found impossible, and the game state was left untouched. The turn
//! engine reacts to these by re-prompting the decision provider.
//!
//! Pass and Quit are **not** errors - they are ordinary [`Choice`] outcomes
//! returned by decision providers and propagated by normal control flow.
//! Programming-contract violations (e.g. removing an identifier the caller
//! already validated) panic instead, following the zone/registry discipline.
//!
//! [`Choice`]: crate::decision::Choice

use thiserror::Error;

use crate::cards::CardClass;

/// A recoverable rule violation.
///
/// The engine never partially applies an operation that returns one of
/// these; callers may retry with different input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Asked to remove or draw more cards than are available.
    #[error("cannot take {requested} cards from {available} available")]
    InsufficientCards {
        /// How many cards were requested.
        requested: usize,
        /// How many cards were actually available.
        available: usize,
    },

    /// No supply pile carries this identifier.
    #[error("no supply pile with identifier {0}")]
    UnknownPile(usize),

    /// The supply pile exists but is empty.
    #[error("the {0} pile is out of stock")]
    OutOfStock(&'static str),

    /// A card of a specific class was required and the selection mismatched.
    #[error("a {required} card is required")]
    WrongKind {
        /// The class the operation insisted on.
        required: CardClass,
    },

    /// The selected card costs more than the allowed maximum.
    #[error("{name} costs {cost}, limit is {limit}")]
    TooExpensive {
        /// Name of the card that was too expensive.
        name: &'static str,
        /// Its unit cost.
        cost: i64,
        /// The maximum allowed cost.
        limit: i64,
    },
}
