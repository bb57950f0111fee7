//! Shared mutable state threaded through a turn.
//!
//! There is no global "current player" pointer: the active seat index is an
//! explicit field, and every phase and effect receives the whole context so
//! attack resolution can reach the other seats' hands and providers.

use crate::core::GameRng;
use crate::decision::DecisionProvider;
use crate::players::Player;
use crate::zones::{Supply, Zone};

/// Everything a turn can touch.
///
/// `players` and `providers` are parallel: `providers[i]` answers for
/// `players[i]`. All mutation is serialized through the single caller that
/// holds this context - one logical actor at a time.
pub struct GameContext<'a> {
    /// All seats, in play order.
    pub players: &'a mut [Player],
    /// Decision providers, parallel to `players`.
    pub providers: &'a mut [Box<dyn DecisionProvider>],
    /// Index of the seat whose turn it is.
    pub current: usize,
    /// The shared supply.
    pub supply: &'a mut Supply,
    /// The shared trash zone. Cards here still exist but are out of play.
    pub trash: &'a mut Zone,
    /// The game's RNG (deck reshuffles mid-turn).
    pub rng: &'a mut GameRng,
}

impl<'a> GameContext<'a> {
    /// Assemble a context for the given active seat.
    ///
    /// Panics if `players` and `providers` disagree in length or `current`
    /// is out of range.
    pub fn new(
        players: &'a mut [Player],
        providers: &'a mut [Box<dyn DecisionProvider>],
        current: usize,
        supply: &'a mut Supply,
        trash: &'a mut Zone,
        rng: &'a mut GameRng,
    ) -> Self {
        assert_eq!(
            players.len(),
            providers.len(),
            "each player needs a decision provider"
        );
        assert!(current < players.len(), "active seat out of range");

        Self {
            players,
            providers,
            current,
            supply,
            trash,
            rng,
        }
    }

    /// Seat indices of every opponent of the active player, in play order.
    pub fn opponent_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.players.len()).filter(move |&i| i != self.current)
    }
}

/// Whether play continues after an interaction, or a player quit.
///
/// Quit propagates out of arbitrarily nested effect resolution and ends the
/// game without scoring; it is an expected outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// The interaction ran to completion (including by Pass).
    Continues,
    /// A player quit; unwind everything.
    Quit,
}
