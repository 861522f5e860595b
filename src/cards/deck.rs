//! The Golden Key deck.
//!
//! The deck is shuffled once when it is dealt. Drawing takes the top card and
//! puts it straight back at the bottom, so card identities never change and
//! the sequence repeats with period equal to the deck size.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::golden_key::GoldenKey;
use crate::core::GameRng;

/// Circular, ordered Golden Key deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenKeyDeck {
    /// Top of the deck is the front.
    cards: Vector<GoldenKey>,
}

impl GoldenKeyDeck {
    /// All cards, shuffled once.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<GoldenKey> = GoldenKey::all().collect();
        rng.shuffle(&mut cards);
        Self::from_order(cards)
    }

    /// Deck in exactly this order, top first.
    #[must_use]
    pub fn from_order(cards: impl IntoIterator<Item = GoldenKey>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Take the top card and return it to the bottom.
    ///
    /// Returns `None` only for an empty deck.
    pub fn draw(&mut self) -> Option<GoldenKey> {
        let card = self.cards.pop_front()?;
        self.cards.push_back(card);
        Some(card)
    }

    /// The card the next draw will return.
    #[must_use]
    pub fn peek(&self) -> Option<GoldenKey> {
        self.cards.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = GoldenKey> + '_ {
        self.cards.iter().copied()
    }
}
