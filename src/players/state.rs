//! Per-player turn-scoped state.
//!
//! A [`Player`] owns four private zones (deck, hand, discard pile, play
//! area - the shared trash lives on the game) plus the turn counters. The
//! turn engine mutates this state; the player type itself only enforces the
//! zone/counter bookkeeping rules.

use crate::cards::{CardClass, CardType, Catalog};
use crate::core::GameRng;
use crate::errors::GameError;
use crate::zones::{transfer, Zone};

/// Cards drawn for a fresh hand.
pub const HAND_SIZE: usize = 5;

/// Starting deck: 7 Copper + 3 Estate.
const STARTING_COPPER: usize = 7;
const STARTING_ESTATES: usize = 3;

/// One player's private zones and counters.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,

    /// Face-down draw pile. Identifier 0 is the top card.
    pub deck: Zone,
    /// Cards currently held.
    pub hand: Zone,
    /// Face-up discard pile, reshuffled into the deck as needed.
    pub discard: Zone,
    /// Action cards played this turn; swept to discard at cleanup.
    pub play_area: Zone,

    /// Action points left this turn.
    pub actions: i64,
    /// Buy points left this turn.
    pub buys: i64,

    // Coins are split: `turn_coins` accumulates from played effects and buy
    // debits, `hand_coins` mirrors the treasures currently in hand. `coins`
    // is their sum and must be recomputed before any purchase decision.
    turn_coins: i64,
    hand_coins: i64,
    coins: i64,

    victory_points: i64,
    turns_taken: u32,
}

impl Player {
    /// Create a player with the standard starting deck, shuffled, and an
    /// opening hand of 5 already drawn.
    #[must_use]
    pub fn new(name: impl Into<String>, catalog: &Catalog, rng: &mut GameRng) -> Self {
        let copper = catalog.card(CardType::Copper);
        let estate = catalog.card(CardType::Estate);

        let mut starting = vec![copper; STARTING_COPPER];
        starting.extend(vec![estate; STARTING_ESTATES]);

        let mut player = Self {
            name: name.into(),
            deck: Zone::from_cards(starting),
            hand: Zone::new(),
            discard: Zone::new(),
            play_area: Zone::new(),
            actions: 0,
            buys: 0,
            turn_coins: 0,
            hand_coins: 0,
            coins: 0,
            victory_points: 0,
            turns_taken: 0,
        };

        player.deck.shuffle(rng);
        player
            .draw(HAND_SIZE, rng)
            .expect("starting deck holds 10 cards");
        player.reset_turn_counters();
        player.recompute_coins();
        player
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total coins available for purchases this turn.
    ///
    /// Only valid after [`recompute_coins`](Self::recompute_coins) has run
    /// since the last hand or coin mutation.
    #[must_use]
    pub fn coins(&self) -> i64 {
        self.coins
    }

    /// Coins accumulated from effects and debits this turn.
    #[must_use]
    pub fn turn_coins(&self) -> i64 {
        self.turn_coins
    }

    /// Victory points accumulated so far (populated at scoring).
    #[must_use]
    pub fn victory_points(&self) -> i64 {
        self.victory_points
    }

    /// Number of turns this player has started.
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Record the start of a turn.
    pub fn begin_turn(&mut self) {
        self.turns_taken += 1;
        self.reset_turn_counters();
        self.recompute_coins();
    }

    /// Grant action points (may be negative).
    pub fn add_actions(&mut self, delta: i64) {
        self.actions += delta;
    }

    /// Grant buy points (may be negative).
    pub fn add_buys(&mut self, delta: i64) {
        self.buys += delta;
    }

    /// Grant coins for this turn (may be negative).
    pub fn add_coins(&mut self, delta: i64) {
        self.turn_coins += delta;
    }

    /// Debit a purchase.
    ///
    /// `turn_coins` may go negative here; the treasures in hand cover the
    /// difference, so the recomputed total stays correct.
    pub fn debit_coins(&mut self, cost: i64) {
        self.turn_coins -= cost;
    }

    /// Reset the per-turn counters: 1 action, 1 buy, 0 turn coins.
    pub fn reset_turn_counters(&mut self) {
        self.actions = 1;
        self.buys = 1;
        self.turn_coins = 0;
    }

    /// Recompute `hand_coins` from the treasures in hand and refresh the
    /// total. Idempotent; must run after any hand or coin mutation before
    /// `coins()` is read.
    pub fn recompute_coins(&mut self) {
        self.hand_coins = self
            .hand
            .cards()
            .iter()
            .filter(|card| card.class() == CardClass::Treasure)
            .map(|card| card.coin_value())
            .sum();
        self.coins = self.turn_coins + self.hand_coins;
    }

    /// Draw `n` cards from the deck into the hand.
    ///
    /// Fails up front with [`GameError::InsufficientCards`] when deck and
    /// discard together hold fewer than `n`; once the aggregate check
    /// passes every card is drawn, reshuffling the discard pile into the
    /// deck whenever the deck runs dry mid-draw.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Result<(), GameError> {
        let available = self.deck.len() + self.discard.len();
        if n > available {
            return Err(GameError::InsufficientCards {
                requested: n,
                available,
            });
        }

        for _ in 0..n {
            if self.deck.is_empty() {
                transfer(&mut self.discard, &mut self.deck, None)
                    .expect("full transfer cannot fail");
                self.deck.shuffle(rng);
            }
            let card = self
                .deck
                .remove_one(self.deck.id_start())
                .expect("aggregate check guarantees a card");
            self.hand.add([card]);
        }

        Ok(())
    }

    /// Draw a fresh hand of 5.
    pub fn draw_hand(&mut self, rng: &mut GameRng) -> Result<(), GameError> {
        self.draw(HAND_SIZE, rng)
    }

    /// Whether any reaction card is currently in hand.
    #[must_use]
    pub fn holds_reaction(&self) -> bool {
        self.hand.cards().iter().any(|card| card.is_reaction())
    }

    /// Post-turn cleanup: sweep play area and hand into the discard pile,
    /// draw a fresh hand, and reset the counters.
    pub fn cleanup(&mut self, rng: &mut GameRng) -> Result<(), GameError> {
        transfer(&mut self.play_area, &mut self.discard, None)
            .expect("full transfer cannot fail");
        transfer(&mut self.hand, &mut self.discard, None).expect("full transfer cannot fail");

        self.draw_hand(rng)?;
        self.reset_turn_counters();
        self.recompute_coins();
        Ok(())
    }

    /// Gather every owned card into the deck and bank its victory points.
    ///
    /// Called once at game end; afterwards `victory_points()` reflects the
    /// player's final score.
    pub fn finalize_for_scoring(&mut self) {
        transfer(&mut self.play_area, &mut self.discard, None)
            .expect("full transfer cannot fail");
        transfer(&mut self.hand, &mut self.discard, None).expect("full transfer cannot fail");
        transfer(&mut self.discard, &mut self.deck, None).expect("full transfer cannot fail");

        let card_points: i64 = self
            .deck
            .cards()
            .iter()
            .map(|card| card.victory_value())
            .sum();
        self.victory_points += card_points;
    }
}
