//! The discard pile.

use alloc::vec::Vec;

use crate::card::Card;

/// A discard pile that always has a top card.
///
/// The pile can only be created from a starting card, so [`DiscardPile::top`]
/// never has to deal with an empty pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardPile {
    top: Card,
    below: Vec<Card>,
}

impl DiscardPile {
    /// Starts a pile with a single card.
    #[must_use]
    pub const fn new(starter: Card) -> Self {
        Self {
            top: starter,
            below: Vec::new(),
        }
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        let previous = core::mem::replace(&mut self.top, card);
        self.below.push(previous);
    }

    /// Returns the top card.
    #[must_use]
    pub const fn top(&self) -> Card {
        self.top
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.below.len() + 1
    }

    /// Always `false`; present for API symmetry with [`len`](Self::len).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the pile from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.below.iter().chain(core::iter::once(&self.top))
    }
}
