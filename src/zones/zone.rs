//! Ordered card container.
//!
//! A [`Zone`] is any ordered collection of cards: a player's deck, hand,
//! discard pile, play area, the shared trash, or one supply pile. Cards in a
//! zone are addressed by *positional identifiers* - contiguous integers
//! starting at a configurable offset, reassigned after every mutation. The
//! identifiers are what decision providers show to players and hand back to
//! the engine.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::errors::GameError;

/// An ordered collection of card instances.
#[derive(Clone, Debug, Default)]
pub struct Zone {
    cards: Vec<Card>,
    id_start: usize,
}

impl Zone {
    /// Create an empty zone with identifiers starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty zone whose identifiers start at `id_start`.
    ///
    /// For zones that share one identifier space with other zones listed
    /// before them, so a single selection prompt can span them.
    #[must_use]
    pub fn with_id_start(id_start: usize) -> Self {
        Self {
            cards: Vec::new(),
            id_start,
        }
    }

    /// Create a zone holding the given cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, id_start: 0 }
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the zone holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// First identifier in this zone.
    #[must_use]
    pub fn id_start(&self) -> usize {
        self.id_start
    }

    /// Current identifier range (`id_start..id_start + len`).
    #[must_use]
    pub fn identifiers(&self) -> std::ops::Range<usize> {
        self.id_start..self.id_start + self.cards.len()
    }

    /// Whether `id` currently addresses a card in this zone.
    #[must_use]
    pub fn contains_id(&self, id: usize) -> bool {
        self.identifiers().contains(&id)
    }

    /// The card at identifier `id`, if present.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Card> {
        if !self.contains_id(id) {
            return None;
        }
        self.cards.get(id - self.id_start)
    }

    /// The cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate `(identifier, card)` pairs in order.
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (i + self.id_start, card))
    }

    /// Append cards to the zone. Identifiers are reassigned.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove the cards addressed by `identifiers`.
    ///
    /// Fails with [`GameError::InsufficientCards`] when asked for more cards
    /// than the zone holds; the zone is left unchanged. Each identifier must
    /// currently address a card - a stale or out-of-range identifier is a
    /// caller bug and panics.
    ///
    /// Removal happens in *descending* identifier order so the remaining
    /// indices stay valid mid-loop, and the removed cards are returned in
    /// that order (highest original identifier first). Callers that care
    /// about order must account for this.
    pub fn remove(&mut self, identifiers: &[usize]) -> Result<Vec<Card>, GameError> {
        if identifiers.len() > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: identifiers.len(),
                available: self.cards.len(),
            });
        }

        // Typical removals touch a handful of cards; sort a scratch copy
        // descending rather than requiring sorted input.
        let mut sorted: SmallVec<[usize; 8]> = SmallVec::from_slice(identifiers);
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut removed = Vec::with_capacity(sorted.len());
        for id in sorted {
            assert!(
                self.contains_id(id),
                "identifier {id} does not address a card in this zone"
            );
            removed.push(self.cards.remove(id - self.id_start));
        }

        Ok(removed)
    }

    /// Remove the single card addressed by `id`.
    pub fn remove_one(&mut self, id: usize) -> Result<Card, GameError> {
        let mut removed = self.remove(&[id])?;
        Ok(removed.pop().expect("remove of one id yields one card"))
    }

    /// Uniformly shuffle the zone's cards. Identifiers are reassigned.
    pub fn shuffle(&mut self, rng: &mut crate::core::GameRng) {
        rng.shuffle(&mut self.cards);
    }
}

/// Move cards from `source` to `target`.
///
/// With `identifiers: None`, moves everything. The compound is atomic from
/// the caller's perspective: if the removal fails, `target` is untouched.
pub fn transfer(
    source: &mut Zone,
    target: &mut Zone,
    identifiers: Option<&[usize]>,
) -> Result<(), GameError> {
    let moved = match identifiers {
        Some(ids) => source.remove(ids)?,
        None => {
            let all: Vec<usize> = source.identifiers().collect();
            source.remove(&all)?
        }
    };
    target.add(moved);
    Ok(())
}
