use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;
use crate::discard::DiscardPile;
use crate::error::InitError;
use crate::hand::Hand;

use super::{Game, Table};

/// Deals `hand_size` cards to each player, one card per player per round.
///
/// Stops early without error if the deck runs out.
fn deal_hands(deck: &mut VecDeque<Card>, num_players: usize, hand_size: usize) -> Vec<Hand> {
    let mut hands: Vec<Hand> = (0..num_players).map(|_| Hand::new()).collect();

    for _ in 0..hand_size {
        for hand in &mut hands {
            let Some(card) = deck.pop_front() else {
                return hands;
            };
            hand.add_card(card);
        }
    }

    hands
}

/// Takes the first numbered card from the deck front.
///
/// Action cards met on the way go to the back of the deck in the order they
/// were met. Every card is inspected at most once.
fn take_starter(deck: &mut VecDeque<Card>) -> Result<Card, InitError> {
    for _ in 0..deck.len() {
        let Some(card) = deck.pop_front() else {
            break;
        };
        if !card.is_action() {
            return Ok(card);
        }
        deck.push_back(card);
    }

    Err(InitError::NoStarterCard)
}

impl Game {
    /// Shuffles a fresh deck, deals every player a hand and turns over the
    /// first numbered card to start the discard pile.
    ///
    /// The shuffle is seeded from [`GameOptions::seed`](crate::GameOptions),
    /// so initializing twice with the same options produces the same game.
    /// Re-initializing discards the cards of any game in progress; the
    /// current player and the direction of play carry over.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds no numbered card to start the
    /// discard pile. The game is left unchanged in that case.
    pub fn initialize(&mut self) -> Result<(), InitError> {
        let deck = Self::create_deck(self.options.seed);
        self.initialize_with_deck(deck)
    }

    /// Deals a game from a deck in the given order, without shuffling.
    ///
    /// The front of `deck` is dealt first. This is useful for replaying a
    /// known deal or setting up a specific position.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck left after dealing holds no numbered card
    /// to start the discard pile. The game is left unchanged in that case.
    pub fn initialize_with_deck(
        &mut self,
        deck: impl Into<VecDeque<Card>>,
    ) -> Result<(), InitError> {
        let mut deck = deck.into();
        let hands = deal_hands(&mut deck, self.num_players, self.options.hand_size);
        let starter = take_starter(&mut deck)?;

        self.table = Some(Table {
            deck,
            discard: DiscardPile::new(starter),
            hands,
        });

        Ok(())
    }
}
