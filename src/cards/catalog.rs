//! The static card catalog.
//!
//! Every card type in the game is enumerated by [`CardType`] and registered
//! in a [`Catalog`] built once at game setup. Kingdom randomization samples
//! from the catalog's action entries; there is no runtime type discovery.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{ActionProfile, Card, CardClass, CardKind, GainDestination, SpecialEffect};

/// Tag identifying one card type in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    // Treasures
    Copper,
    Silver,
    Gold,
    // Victory
    Estate,
    Duchy,
    Province,
    // Actions
    Cellar,
    Market,
    Merchant,
    Militia,
    Mine,
    Moat,
    Remodel,
    Smithy,
    Village,
    Workshop,
    Festival,
    Laboratory,
}

impl CardType {
    /// Every card type, treasures first, then victory, then actions.
    pub const ALL: [CardType; 18] = [
        CardType::Copper,
        CardType::Silver,
        CardType::Gold,
        CardType::Estate,
        CardType::Duchy,
        CardType::Province,
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
        CardType::Festival,
        CardType::Laboratory,
    ];
}

fn treasure(ty: CardType, name: &'static str, cost: i64, coin: i64) -> Card {
    Card {
        ty,
        name,
        cost,
        kind: CardKind::Treasure { coin },
    }
}

fn victory(ty: CardType, name: &'static str, cost: i64, victory: i64) -> Card {
    Card {
        ty,
        name,
        cost,
        kind: CardKind::Victory { victory },
    }
}

fn action(ty: CardType, name: &'static str, cost: i64, profile: ActionProfile) -> Card {
    Card {
        ty,
        name,
        cost,
        kind: CardKind::Action(profile),
    }
}

/// Registry of card templates.
///
/// Built once via [`Catalog::standard`] and shared read-only afterwards.
/// Lookup hands out `Copy` templates; supply piles and starting decks are
/// stamped out from these.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: FxHashMap<CardType, Card>,
}

impl Catalog {
    /// Build the standard 18-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::default();

        catalog.register(treasure(CardType::Copper, "Copper", 0, 1));
        catalog.register(treasure(CardType::Silver, "Silver", 3, 2));
        catalog.register(treasure(CardType::Gold, "Gold", 6, 3));

        catalog.register(victory(CardType::Estate, "Estate", 2, 1));
        catalog.register(victory(CardType::Duchy, "Duchy", 5, 3));
        catalog.register(victory(CardType::Province, "Province", 8, 6));

        catalog.register(action(
            CardType::Cellar,
            "Cellar",
            2,
            ActionProfile {
                actions: 1,
                special: Some(SpecialEffect::DiscardThenDraw),
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Market,
            "Market",
            5,
            ActionProfile {
                cards: 1,
                actions: 1,
                buys: 1,
                coin: 1,
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Merchant,
            "Merchant",
            3,
            ActionProfile {
                cards: 1,
                actions: 1,
                special: Some(SpecialEffect::CoinPerSilverInHand),
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Militia,
            "Militia",
            4,
            ActionProfile {
                coin: 2,
                special: Some(SpecialEffect::ForceDiscardDown { hand_limit: 3 }),
                attack: true,
                single_player: false,
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Mine,
            "Mine",
            5,
            ActionProfile {
                special: Some(SpecialEffect::TrashAndUpgrade {
                    cost_bonus: 3,
                    required: Some(CardClass::Treasure),
                    destination: GainDestination::Hand,
                }),
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Moat,
            "Moat",
            2,
            ActionProfile {
                cards: 2,
                reaction: true,
                single_player: false,
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Remodel,
            "Remodel",
            4,
            ActionProfile {
                special: Some(SpecialEffect::TrashAndUpgrade {
                    cost_bonus: 2,
                    required: None,
                    destination: GainDestination::Discard,
                }),
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Smithy,
            "Smithy",
            4,
            ActionProfile {
                cards: 3,
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Village,
            "Village",
            3,
            ActionProfile {
                cards: 1,
                actions: 2,
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Workshop,
            "Workshop",
            3,
            ActionProfile {
                special: Some(SpecialEffect::GainUpTo { max_cost: 4 }),
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Festival,
            "Festival",
            5,
            ActionProfile {
                actions: 2,
                buys: 1,
                coin: 2,
                ..ActionProfile::none()
            },
        ));
        catalog.register(action(
            CardType::Laboratory,
            "Laboratory",
            5,
            ActionProfile {
                cards: 2,
                actions: 1,
                ..ActionProfile::none()
            },
        ));

        catalog
    }

    /// Register a card template.
    ///
    /// Panics if the type is already registered.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.ty) {
            panic!("Card type {:?} already registered", card.ty);
        }
        self.cards.insert(card.ty, card);
    }

    /// Get the template for a card type.
    ///
    /// Panics if the type is not registered; the standard catalog registers
    /// every `CardType`.
    #[must_use]
    pub fn card(&self, ty: CardType) -> Card {
        *self
            .cards
            .get(&ty)
            .unwrap_or_else(|| panic!("Card type {ty:?} not in catalog"))
    }

    /// Number of registered card types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All registered action card types, in `CardType::ALL` order.
    ///
    /// Used for random kingdom sampling.
    #[must_use]
    pub fn action_types(&self) -> Vec<CardType> {
        CardType::ALL
            .iter()
            .copied()
            .filter(|&ty| self.cards.get(&ty).is_some_and(Card::is_action))
            .collect()
    }
}
