//! Game state types.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Constructed but no cards dealt yet.
    NotDealt,
    /// Cards dealt and turns remain to be played.
    InProgress,
    /// A player emptied their hand.
    Won(usize),
    /// The deck is empty and nobody holds a playable card.
    Stalemate,
}

impl GameState {
    /// Returns whether no further turns will be played.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won(_) | Self::Stalemate)
    }
}

/// Direction of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Player indices increase.
    #[default]
    Clockwise,
    /// Player indices decrease.
    CounterClockwise,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Returns the seat `steps` places away from `from` around a table of `seats`.
    #[must_use]
    pub const fn step(self, from: usize, steps: usize, seats: usize) -> usize {
        let steps = steps % seats;
        match self {
            Self::Clockwise => (from + steps) % seats,
            Self::CounterClockwise => (from + seats - steps) % seats,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clockwise => f.write_str("Clockwise"),
            Self::CounterClockwise => f.write_str("Counter-clockwise"),
        }
    }
}

/// A point-in-time view of a dealt game.
///
/// The [`Display`](fmt::Display) form is the one-line status used by drivers:
///
/// ```text
/// Player 0's turn, Direction: Clockwise, Top: Red 5, Players cards: P0:7, P1:7
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The player whose turn it is.
    pub current_player: usize,
    /// Direction of play.
    pub direction: Direction,
    /// Top of the discard pile.
    pub top: Card,
    /// Hand sizes in player order.
    pub hand_sizes: Vec<usize>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {}'s turn, Direction: {}, Top: {}, Players cards: ",
            self.current_player, self.direction, self.top
        )?;
        for (player, size) in self.hand_sizes.iter().enumerate() {
            if player > 0 {
                f.write_str(", ")?;
            }
            write!(f, "P{player}:{size}")?;
        }
        Ok(())
    }
}
