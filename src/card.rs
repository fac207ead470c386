//! Card types and deck utilities.

use alloc::collections::VecDeque;
use core::fmt;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
}

/// All colors in deck-building order.
pub const COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// Face value of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// Numbered card (0-9).
    Number(u8),
    /// Skips the next player.
    Skip,
    /// Flips the direction of play.
    Reverse,
    /// The next player draws two cards and loses their turn.
    DrawTwo,
}

/// Action values in deck-building order.
pub const ACTION_VALUES: [Value; 3] = [Value::Skip, Value::Reverse, Value::DrawTwo];

impl Value {
    /// Returns whether this is an action value (Skip, Reverse or Draw Two).
    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(self, Self::Skip | Self::Reverse | Self::DrawTwo)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Skip => f.write_str("Skip"),
            Self::Reverse => f.write_str("Reverse"),
            Self::DrawTwo => f.write_str("Draw Two"),
        }
    }
}

/// An UNO card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The color of the card.
    pub color: Color,
    /// The face value of the card.
    pub value: Value,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate numbered values. Numbers above 9
    /// are accepted but never appear in a standard deck.
    #[must_use]
    pub const fn new(color: Color, value: Value) -> Self {
        Self { color, value }
    }

    /// Creates a numbered card.
    #[must_use]
    pub const fn number(color: Color, n: u8) -> Self {
        Self::new(color, Value::Number(n))
    }

    /// Returns whether this is an action card.
    #[must_use]
    pub const fn is_action(&self) -> bool {
        self.value.is_action()
    }

    /// Returns whether this card can be played on `top` (same color or same value).
    #[must_use]
    pub fn can_play_on(&self, top: &Self) -> bool {
        self.color == top.color || self.value == top.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 76;

/// Builds an unshuffled deck.
///
/// Each color contributes one `0` and two copies each of `1`-`9`, Skip,
/// Reverse and Draw Two.
#[must_use]
pub fn full_deck() -> VecDeque<Card> {
    let mut cards = VecDeque::with_capacity(DECK_SIZE);

    for color in COLORS {
        cards.push_back(Card::number(color, 0));
        for _ in 0..2 {
            for n in 1..=9 {
                cards.push_back(Card::number(color, n));
            }
            for value in ACTION_VALUES {
                cards.push_back(Card::new(color, value));
            }
        }
    }

    cards
}
