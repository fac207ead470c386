//! Turn report types.

use crate::card::Card;

/// What the acting player did on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Played a card from hand.
    Played(Card),
    /// Had nothing to play, drew a playable card and played it at once.
    DrewAndPlayed(Card),
    /// Had nothing to play and kept the card drawn.
    DrewAndKept(Card),
    /// Had nothing to play and the deck was empty.
    Passed,
}

impl TurnAction {
    /// Returns the card that reached the discard pile, if any.
    #[must_use]
    pub const fn discarded(&self) -> Option<Card> {
        match *self {
            Self::Played(card) | Self::DrewAndPlayed(card) => Some(card),
            Self::DrewAndKept(_) | Self::Passed => None,
        }
    }
}

/// Side effect applied after a card reached the discard pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Turn passed to the next player.
    None,
    /// Next player was skipped.
    Skip,
    /// Direction flipped.
    Reverse,
    /// Next player drew cards and was skipped.
    DrawTwo {
        /// The player who drew.
        victim: usize,
        /// Cards actually drawn (fewer than two when the deck ran out).
        drawn: usize,
    },
}

/// Result of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The player who acted.
    pub player: usize,
    /// What the player did.
    pub action: TurnAction,
    /// Effect applied by the discarded card.
    pub effect: Effect,
    /// Whether the player is down to a single card after playing ("UNO").
    pub uno: bool,
    /// The player whose turn is next.
    pub next_player: usize,
}
