//! Player hand representation.

use alloc::vec::Vec;

use crate::card::Card;

/// A player's hand.
///
/// Cards keep the order in which they were received; play selection scans
/// them front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the index of the first card matching `predicate`.
    #[must_use]
    pub fn position(&self, predicate: impl FnMut(&Card) -> bool) -> Option<usize> {
        self.cards.iter().position(predicate)
    }

    /// Removes and returns the card at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns whether any card can be played on `top`.
    #[must_use]
    pub fn has_playable(&self, top: &Card) -> bool {
        self.cards.iter().any(|card| card.can_play_on(top))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
