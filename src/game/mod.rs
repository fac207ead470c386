//! Game engine and state management.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, full_deck};
use crate::discard::DiscardPile;
use crate::error::{SetupError, StateError};
use crate::hand::Hand;
use crate::options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};

mod deal;
pub mod state;
mod status;
mod turn;

pub use state::{Direction, GameState, Snapshot};

/// Cards in play once a game has been dealt.
#[derive(Debug, Clone)]
struct Table {
    /// Draw pile, drawn from the front.
    deck: VecDeque<Card>,
    /// Discard pile.
    discard: DiscardPile,
    /// One hand per player, in seat order.
    hands: Vec<Hand>,
}

impl Table {
    /// Lowest seat with an empty hand.
    fn winner(&self) -> Option<usize> {
        self.hands.iter().position(Hand::is_empty)
    }

    fn is_stalemate(&self) -> bool {
        let top = self.discard.top();
        self.deck.is_empty() && !self.hands.iter().any(|hand| hand.has_playable(&top))
    }

    /// Moves up to `count` cards from the deck front into a player's hand.
    fn draw_into(&mut self, player: usize, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            let Some(card) = self.deck.pop_front() else {
                break;
            };
            self.hands[player].add_card(card);
            drawn += 1;
        }
        drawn
    }
}

/// An UNO game engine that owns the deck, discard pile and hands.
///
/// A game is created with [`Game::new`], dealt with [`Game::initialize`] and
/// then advanced with [`Game::play_turn`] until [`Game::is_game_over`]
/// returns `true`. Every turn is decided by the engine itself, so a game is
/// fully determined by its [`GameOptions`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Number of seats at the table.
    num_players: usize,
    /// Seat whose turn it is.
    current_player: usize,
    /// Direction of play.
    direction: Direction,
    /// Dealt cards; `None` until the game is initialized.
    table: Option<Table>,
}

impl Game {
    /// Creates a new game with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_players` is not between 2 and 4.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::{Game, SetupError};
    ///
    /// assert!(Game::new(3).is_ok());
    /// assert_eq!(Game::new(5).unwrap_err(), SetupError::InvalidPlayerCount(5));
    /// ```
    pub fn new(num_players: usize) -> Result<Self, SetupError> {
        Self::with_options(num_players, GameOptions::default())
    }

    /// Creates a new game with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_players` is not between 2 and 4.
    pub const fn with_options(
        num_players: usize,
        options: GameOptions,
    ) -> Result<Self, SetupError> {
        if num_players < MIN_PLAYERS || num_players > MAX_PLAYERS {
            return Err(SetupError::InvalidPlayerCount(num_players));
        }

        Ok(Self {
            options,
            num_players,
            current_player: 0,
            direction: Direction::Clockwise,
            table: None,
        })
    }

    /// Creates a shuffled deck from the given seed.
    fn create_deck(seed: u64) -> VecDeque<Card> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.make_contiguous().shuffle(&mut rng);
        cards
    }

    fn table(&self) -> Result<&Table, StateError> {
        self.table.as_ref().ok_or(StateError::Uninitialized)
    }

    /// Returns the seat `skip + 1` places away in the current direction.
    const fn next_seat(&self, skip: usize) -> usize {
        self.direction
            .step(self.current_player, skip + 1, self.num_players)
    }

    /// Passes the turn on, skipping `skip` players.
    const fn advance(&mut self, skip: usize) {
        self.current_player = self.next_seat(skip);
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of players.
    #[must_use]
    pub const fn num_players(&self) -> usize {
        self.num_players
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the current direction of play.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns whether the game has been dealt.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.table.is_some()
    }

    /// Returns the specified player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized or the player
    /// index is out of range.
    pub fn hand(&self, player: usize) -> Result<&Hand, StateError> {
        self.table()?
            .hands
            .get(player)
            .ok_or(StateError::PlayerNotFound)
    }

    /// Returns the top card of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn top(&self) -> Result<Card, StateError> {
        Ok(self.table()?.discard.top())
    }

    /// Returns the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn discard(&self) -> Result<&DiscardPile, StateError> {
        Ok(&self.table()?.discard)
    }

    /// Returns the draw pile, front first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn deck(&self) -> Result<&VecDeque<Card>, StateError> {
        Ok(&self.table()?.deck)
    }

    /// Returns the number of cards remaining in the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn cards_remaining(&self) -> Result<usize, StateError> {
        Ok(self.table()?.deck.len())
    }

    /// Returns the number of cards across the deck, the discard pile and all hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn total_cards(&self) -> Result<usize, StateError> {
        let table = self.table()?;
        let in_hands: usize = table.hands.iter().map(Hand::len).sum();
        Ok(table.deck.len() + table.discard.len() + in_hands)
    }
}
