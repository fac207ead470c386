use alloc::string::{String, ToString};

use crate::error::StateError;
use crate::hand::Hand;

use super::{Game, GameState, Snapshot};

impl Game {
    /// Returns the current game state.
    ///
    /// The state is derived from the cards in play on every call. Unlike the
    /// other queries this never fails: before [`Game::initialize`] it returns
    /// [`GameState::NotDealt`].
    #[must_use]
    pub fn state(&self) -> GameState {
        let Some(table) = &self.table else {
            return GameState::NotDealt;
        };

        if let Some(player) = table.winner() {
            GameState::Won(player)
        } else if table.is_stalemate() {
            GameState::Stalemate
        } else {
            GameState::InProgress
        }
    }

    /// Returns whether the game is over.
    ///
    /// The game ends when a player has no cards left, or when the deck is
    /// empty and nobody holds a card matching the top of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn is_game_over(&self) -> Result<bool, StateError> {
        self.table()?;
        Ok(self.state().is_over())
    }

    /// Returns the lowest-numbered player with an empty hand.
    ///
    /// Returns `None` if every player still holds cards, including after a
    /// stalemate.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn winner(&self) -> Result<Option<usize>, StateError> {
        Ok(self.table()?.winner())
    }

    /// Returns the winner as a player index, or `-1` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    #[expect(clippy::cast_possible_wrap, reason = "player indices are at most 3")]
    pub fn winner_index(&self) -> Result<i32, StateError> {
        Ok(self.winner()?.map_or(-1, |player| player as i32))
    }

    /// Returns a snapshot of the visible game state.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn snapshot(&self) -> Result<Snapshot, StateError> {
        let table = self.table()?;
        Ok(Snapshot {
            current_player: self.current_player,
            direction: self.direction,
            top: table.discard.top(),
            hand_sizes: table.hands.iter().map(Hand::len).collect(),
            cards_remaining: table.deck.len(),
        })
    }

    /// Returns the one-line status of the game.
    ///
    /// ```text
    /// Player 1's turn, Direction: Counter-clockwise, Top: Blue Draw Two, Players cards: P0:4, P1:6, P2:5
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn state_string(&self) -> Result<String, StateError> {
        Ok(self.snapshot()?.to_string())
    }
}
