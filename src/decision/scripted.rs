//! Queue-backed decision provider.
//!
//! [`ScriptedDecisions`] answers every prompt from a pre-loaded FIFO queue,
//! regardless of which prompt it is. Tests drive entire turns with it; a
//! non-interactive frontend (replay, scripted demo) can use it the same way.

use std::collections::VecDeque;

use super::{Choice, DecisionProvider};
use crate::cards::{CardClass, GainDestination};
use crate::zones::{Supply, Zone};

/// A decision provider that replays a fixed sequence of choices.
///
/// Once the queue is exhausted every prompt answers [`Choice::Quit`], so a
/// script that falls behind the game's actual prompts terminates the game
/// instead of looping.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    queue: VecDeque<Choice>,
}

impl ScriptedDecisions {
    /// Create an empty script (answers Quit to everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script from a sequence of choices.
    #[must_use]
    pub fn from_choices(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            queue: choices.into_iter().collect(),
        }
    }

    /// Append a choice to the script.
    pub fn push(&mut self, choice: Choice) {
        self.queue.push_back(choice);
    }

    /// Choices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    fn next(&mut self) -> Choice {
        self.queue.pop_front().unwrap_or(Choice::Quit)
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn choose_card_to_discard(&mut self, _hand: &Zone) -> Choice {
        self.next()
    }

    fn choose_card_to_trash(&mut self, _hand: &Zone, _required: Option<CardClass>) -> Choice {
        self.next()
    }

    fn choose_action_card_to_play(&mut self, _hand: &Zone) -> Choice {
        self.next()
    }

    fn choose_card_to_buy(
        &mut self,
        _supply: &Supply,
        _available_coins: i64,
        _available_buys: i64,
    ) -> Choice {
        self.next()
    }

    fn choose_card_to_gain(
        &mut self,
        _supply: &Supply,
        _max_cost: i64,
        _required: Option<CardClass>,
        _destination: GainDestination,
    ) -> Choice {
        self.next()
    }
}
