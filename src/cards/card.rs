//! Card value types.
//!
//! A [`Card`] is an immutable value: once created it is never mutated, and
//! duplicates in play are distinct copies sharing identical data. All
//! behavior a card can have is described by data here - the turn engine
//! interprets it; cards hold no logic of their own.

use serde::Serialize;

use super::catalog::CardType;

/// The three card classes of the game.
///
/// Operations that restrict what may be trashed or gained (e.g. "trash a
/// Treasure") name the class they require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
pub enum CardClass {
    /// Worth coin during the buy phase.
    Treasure,
    /// Worth victory points at game end.
    Victory,
    /// Playable during the action phase.
    Action,
}

impl std::fmt::Display for CardClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardClass::Treasure => "Treasure",
            CardClass::Victory => "Victory",
            CardClass::Action => "Action",
        };
        f.write_str(name)
    }
}

/// Where a gained card is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, serde::Deserialize)]
pub enum GainDestination {
    /// Into the gaining player's hand (e.g. Mine).
    Hand,
    /// Into the gaining player's discard pile (the normal case).
    Discard,
}

/// The scripted portion of an action card that goes beyond fixed numeric
/// grants.
///
/// Each variant carries only the data it needs; the turn engine dispatches
/// on the variant explicitly. Attack cards combine a variant here with the
/// `attack` flag: the engine applies the variant to each opponent instead
/// of the player who played the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, serde::Deserialize)]
pub enum SpecialEffect {
    /// Discard any number of cards, then draw that many (Cellar).
    DiscardThenDraw,
    /// +1 coin if a Silver is in hand (Merchant).
    ///
    /// The original rule is "the first time you play a Silver this turn";
    /// this engine deliberately reproduces the simplified any-Silver-in-hand
    /// reading.
    CoinPerSilverInHand,
    /// Each affected player discards down to `hand_limit` cards (Militia).
    ForceDiscardDown {
        /// Hand size the affected player must reach.
        hand_limit: usize,
    },
    /// Trash a card, then gain one costing up to `cost_bonus` more
    /// (Mine, Remodel).
    TrashAndUpgrade {
        /// Added to the trashed card's cost to form the gain budget.
        cost_bonus: i64,
        /// Class both the trashed and gained card must have, if any.
        required: Option<CardClass>,
        /// Where the gained card lands.
        destination: GainDestination,
    },
    /// Gain any card costing up to `max_cost` (Workshop).
    GainUpTo {
        /// Maximum cost of the gained card.
        max_cost: i64,
    },
}

/// Fixed effects of an action card.
///
/// The four numeric grants are unconditional: once the card is played they
/// are applied in full before any `special` sub-choice runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct ActionProfile {
    /// Action points granted (+A).
    pub actions: i64,
    /// Buy points granted (+B).
    pub buys: i64,
    /// Cards drawn (+Ca).
    pub cards: i64,
    /// Coin granted for this turn (+C).
    pub coin: i64,
    /// Scripted effect beyond the numeric grants.
    pub special: Option<SpecialEffect>,
    /// Attack card: the special is forced on every opponent.
    pub attack: bool,
    /// Reaction card: holding it in hand negates attacks against you.
    pub reaction: bool,
    /// Card only makes sense in a solo game supply.
    pub single_player: bool,
}

impl ActionProfile {
    /// A profile with no grants and no flags.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            actions: 0,
            buys: 0,
            cards: 0,
            coin: 0,
            special: None,
            attack: false,
            reaction: false,
            single_player: true,
        }
    }
}

/// Class-specific payload of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CardKind {
    /// A treasure worth `coin` during the buy phase.
    Treasure {
        /// Coin value while in hand.
        coin: i64,
    },
    /// A victory card worth `victory` points at game end.
    Victory {
        /// Victory point value.
        victory: i64,
    },
    /// An action card with the given profile.
    Action(ActionProfile),
}

/// An immutable card.
///
/// `Card` is `Copy`: supply piles hand out copies of a template, and a
/// player's deck is built from copies. Identity never matters, only value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Catalog tag this card was built from.
    pub ty: CardType,
    /// Display name.
    pub name: &'static str,
    /// Purchase cost in coin.
    pub cost: i64,
    /// Class-specific payload.
    pub kind: CardKind,
}

impl Card {
    /// The card's class tag.
    #[must_use]
    pub fn class(&self) -> CardClass {
        match self.kind {
            CardKind::Treasure { .. } => CardClass::Treasure,
            CardKind::Victory { .. } => CardClass::Victory,
            CardKind::Action(_) => CardClass::Action,
        }
    }

    /// Coin value while in hand (0 for non-treasures).
    #[must_use]
    pub fn coin_value(&self) -> i64 {
        match self.kind {
            CardKind::Treasure { coin } => coin,
            _ => 0,
        }
    }

    /// Victory point value at scoring (0 for non-victory cards).
    #[must_use]
    pub fn victory_value(&self) -> i64 {
        match self.kind {
            CardKind::Victory { victory } => victory,
            _ => 0,
        }
    }

    /// The action profile, if this is an action card.
    #[must_use]
    pub fn action_profile(&self) -> Option<&ActionProfile> {
        match &self.kind {
            CardKind::Action(profile) => Some(profile),
            _ => None,
        }
    }

    /// Whether this card can be played during the action phase.
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self.kind, CardKind::Action(_))
    }

    /// Whether holding this card in hand negates attacks.
    #[must_use]
    pub fn is_reaction(&self) -> bool {
        self.action_profile().is_some_and(|p| p.reaction)
    }
}
