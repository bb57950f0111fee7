//! The decision seam between the engine and its presentation layer.
//!
//! The engine never reads input or prints anything. Whenever a rule calls
//! for a choice, it asks the acting player's [`DecisionProvider`] and gets
//! back a terminal [`Choice`]. Non-terminal interactions (help topics,
//! invalid text input) are the provider's own business - it re-prompts its
//! human and only ever returns a card identifier, a pass, or a quit.

pub mod scripted;

pub use scripted::ScriptedDecisions;

use serde::{Deserialize, Serialize};

use crate::cards::{CardClass, GainDestination};
use crate::zones::{Supply, Zone};

/// A terminal decision from a provider.
///
/// Pass and Quit are expected, frequent outcomes, so they travel as values
/// through ordinary control flow - never as errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    /// The identifier of a selected card (zone or supply identifier,
    /// depending on the prompt).
    Card(usize),
    /// Decline and end the current choice loop.
    Pass,
    /// Abort the entire game.
    Quit,
}

/// Source of choices for one player.
///
/// The engine validates every returned identifier and re-prompts (calls the
/// same method again) when validation fails, so implementations are free to
/// return whatever their player typed.
pub trait DecisionProvider {
    /// Pick a card from `hand` to discard.
    fn choose_card_to_discard(&mut self, hand: &Zone) -> Choice;

    /// Pick a card from `hand` to trash, optionally restricted to a class.
    fn choose_card_to_trash(&mut self, hand: &Zone, required: Option<CardClass>) -> Choice;

    /// Pick an action card from `hand` to play.
    fn choose_action_card_to_play(&mut self, hand: &Zone) -> Choice;

    /// Pick a supply pile to buy from.
    fn choose_card_to_buy(
        &mut self,
        supply: &Supply,
        available_coins: i64,
        available_buys: i64,
    ) -> Choice;

    /// Pick a supply pile to gain from (no coin or buy spent).
    fn choose_card_to_gain(
        &mut self,
        supply: &Supply,
        max_cost: i64,
        required: Option<CardClass>,
        destination: GainDestination,
    ) -> Choice;
}
