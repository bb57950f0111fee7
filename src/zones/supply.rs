//! The shared supply of purchasable piles.
//!
//! The supply is split into a fixed *base* group (treasure and victory
//! tiers) and a configurable *kingdom* group of 10 action piles. Pile
//! identifiers are global: base piles are `0..=5`, kingdom piles continue
//! from there. All end-of-game criteria are supply-driven.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardClass, CardType, Catalog};
use crate::core::GameRng;
use crate::errors::GameError;
use crate::zones::Zone;

/// Number of action piles in every kingdom.
pub const KINGDOM_PILES: usize = 10;

/// Cards per kingdom pile.
const KINGDOM_PILE_SIZE: usize = 10;

/// Base pile layout: Copper, Silver, Gold, Estate, Duchy, Province.
const BASE_PILE_TYPES: [CardType; 6] = [
    CardType::Copper,
    CardType::Silver,
    CardType::Gold,
    CardType::Estate,
    CardType::Duchy,
    CardType::Province,
];

/// Index of the Province pile within the base group.
const PROVINCE_PILE: usize = 5;

/// How the 10 kingdom piles are selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KingdomSetup {
    /// The recommended first-game set.
    #[default]
    FirstGame,
    /// Single-player set (no attack or reaction cards).
    Solo,
    /// Uniform random sample of 10 distinct action card types.
    Random,
}

impl KingdomSetup {
    fn pile_types(self, catalog: &Catalog, rng: &mut GameRng) -> Vec<CardType> {
        match self {
            KingdomSetup::FirstGame => vec![
                CardType::Cellar,
                CardType::Market,
                CardType::Merchant,
                CardType::Militia,
                CardType::Mine,
                CardType::Moat,
                CardType::Remodel,
                CardType::Smithy,
                CardType::Village,
                CardType::Workshop,
            ],
            KingdomSetup::Solo => vec![
                CardType::Cellar,
                CardType::Market,
                CardType::Merchant,
                CardType::Mine,
                CardType::Remodel,
                CardType::Smithy,
                CardType::Village,
                CardType::Workshop,
                CardType::Festival,
                CardType::Laboratory,
            ],
            KingdomSetup::Random => {
                let actions = catalog.action_types();
                rng.sample_indices(actions.len(), KINGDOM_PILES)
                    .into_iter()
                    .map(|i| actions[i])
                    .collect()
            }
        }
    }
}

/// One homogeneous pile of purchasable cards.
///
/// The template is kept alongside the cards so cost and class queries (and
/// display) still work after the pile empties.
#[derive(Clone, Debug)]
pub struct SupplyPile {
    template: Card,
    cards: Zone,
}

impl SupplyPile {
    fn new(template: Card, count: usize) -> Self {
        Self {
            template,
            cards: Zone::from_cards(vec![template; count]),
        }
    }

    /// The card this pile sells.
    #[must_use]
    pub fn template(&self) -> &Card {
        &self.template
    }

    /// Cards left in the pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is depleted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn take_one(&mut self) -> Result<Card, GameError> {
        self.cards.remove_one(self.cards.id_start())
    }
}

/// The full supply for one game.
#[derive(Clone, Debug)]
pub struct Supply {
    base: Vec<SupplyPile>,
    kingdom: Vec<SupplyPile>,
}

impl Supply {
    /// Build the supply for `num_players` players.
    ///
    /// Pile sizes scale with the player count: the victory tiers hold 8
    /// cards with up to 2 players and 12 otherwise, and the Copper pile
    /// holds `60 - 7 x players` (each player's starting deck takes 7). A
    /// 1-player game always uses the Solo kingdom regardless of `setup`.
    ///
    /// Panics unless `1 <= num_players <= 4`.
    #[must_use]
    pub fn new(
        catalog: &Catalog,
        num_players: usize,
        setup: KingdomSetup,
        rng: &mut GameRng,
    ) -> Self {
        assert!(
            (1..=4).contains(&num_players),
            "Player count must be 1-4, got {num_players}"
        );

        let num_victory = if num_players > 2 { 12 } else { 8 };

        let base_count = |ty: CardType| match ty {
            CardType::Copper => 60 - num_players * 7,
            CardType::Silver => 40,
            CardType::Gold => 30,
            _ => num_victory,
        };

        let base: Vec<SupplyPile> = BASE_PILE_TYPES
            .iter()
            .map(|&ty| SupplyPile::new(catalog.card(ty), base_count(ty)))
            .collect();

        let setup = if num_players == 1 {
            KingdomSetup::Solo
        } else {
            setup
        };

        let kingdom: Vec<SupplyPile> = setup
            .pile_types(catalog, rng)
            .into_iter()
            .map(|ty| SupplyPile::new(catalog.card(ty), KINGDOM_PILE_SIZE))
            .collect();

        Self { base, kingdom }
    }

    /// First identifier of the kingdom group.
    #[must_use]
    pub fn kingdom_id_start(&self) -> usize {
        self.base.len()
    }

    /// Iterate `(identifier, pile)` over base then kingdom piles.
    ///
    /// This is the display surface for frontends.
    pub fn piles(&self) -> impl Iterator<Item = (usize, &SupplyPile)> {
        self.base.iter().chain(self.kingdom.iter()).enumerate()
    }

    /// The base-group piles in identifier order.
    #[must_use]
    pub fn base_piles(&self) -> &[SupplyPile] {
        &self.base
    }

    /// The kingdom-group piles in identifier order.
    #[must_use]
    pub fn kingdom_piles(&self) -> &[SupplyPile] {
        &self.kingdom
    }

    fn pile(&self, id: usize) -> Option<&SupplyPile> {
        if id < self.base.len() {
            self.base.get(id)
        } else {
            self.kingdom.get(id - self.base.len())
        }
    }

    fn pile_mut(&mut self, id: usize) -> Option<&mut SupplyPile> {
        if id < self.base.len() {
            self.base.get_mut(id)
        } else {
            self.kingdom.get_mut(id - self.base.len())
        }
    }

    /// Cards left in the Province pile.
    #[must_use]
    pub fn provinces_remaining(&self) -> usize {
        self.base[PROVINCE_PILE].remaining()
    }

    /// Whether the supply says the game is over.
    ///
    /// True once more than two piles (base and kingdom combined) are empty,
    /// or once the Province pile alone is empty. Checked before every
    /// player's turn.
    #[must_use]
    pub fn is_end_of_game(&self) -> bool {
        let empty_piles = self.piles().filter(|(_, pile)| pile.is_empty()).count();
        empty_piles > 2 || self.provinces_remaining() == 0
    }

    /// Take one card from the pile addressed by `id`, validating the
    /// request.
    ///
    /// This implements *gain* semantics: coin is never debited here - the
    /// caller decides whether the acquisition costs anything. Validation
    /// order: unknown pile, empty pile, wrong class (when `required` is
    /// given), then cost above `max_cost`. On failure the supply is
    /// untouched.
    pub fn resolve_purchase(
        &mut self,
        id: usize,
        max_cost: i64,
        required: Option<CardClass>,
    ) -> Result<Card, GameError> {
        let pile = self.pile(id).ok_or(GameError::UnknownPile(id))?;

        if pile.is_empty() {
            return Err(GameError::OutOfStock(pile.template.name));
        }
        if let Some(class) = required {
            if pile.template.class() != class {
                return Err(GameError::WrongKind { required: class });
            }
        }
        if pile.template.cost > max_cost {
            return Err(GameError::TooExpensive {
                name: pile.template.name,
                cost: pile.template.cost,
                limit: max_cost,
            });
        }

        self.pile_mut(id)
            .expect("pile validated above")
            .take_one()
    }
}
