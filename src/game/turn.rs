use crate::card::{Card, Value};
use crate::error::StateError;
use crate::hand::Hand;
use crate::result::{Effect, TurnAction, TurnReport};

use super::Game;

/// Picks the card to play on `top`, scanning the hand in order.
///
/// A color match beats a value match, which beats a playable action card.
fn choose_card(hand: &Hand, top: &Card) -> Option<usize> {
    hand.position(|card| card.color == top.color)
        .or_else(|| hand.position(|card| card.value == top.value))
        // Already covered by the two scans above; kept so the scan order stays fixed.
        .or_else(|| hand.position(|card| card.is_action() && card.can_play_on(top)))
}

impl Game {
    /// Applies the effect of a card that just reached the discard pile and
    /// passes the turn accordingly.
    fn apply_effect(&mut self, card: Card) -> Effect {
        match card.value {
            Value::Skip => {
                self.advance(1);
                Effect::Skip
            }
            Value::Reverse => {
                self.direction = self.direction.reversed();
                // With two players a reverse hands the turn straight back.
                self.advance(usize::from(self.num_players == 2));
                Effect::Reverse
            }
            Value::DrawTwo => {
                let victim = self.next_seat(0);
                let drawn = self
                    .table
                    .as_mut()
                    .map_or(0, |table| table.draw_into(victim, 2));
                self.advance(1);
                Effect::DrawTwo { victim, drawn }
            }
            Value::Number(_) => {
                self.advance(0);
                Effect::None
            }
        }
    }

    /// Plays one turn for the current player.
    ///
    /// The player plays the first card in hand matching the top card's
    /// color, otherwise the first matching its value. With nothing to play
    /// they draw one card, playing it at once if it fits and keeping it
    /// otherwise. Skip, Reverse and Draw Two take effect as they are
    /// discarded.
    ///
    /// Returns `None` without changing anything if the game is already over.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn play_turn(&mut self) -> Result<Option<TurnReport>, StateError> {
        if self.is_game_over()? {
            return Ok(None);
        }

        let player = self.current_player;
        let table = self.table.as_mut().ok_or(StateError::Uninitialized)?;
        let top = table.discard.top();
        let hand = table
            .hands
            .get_mut(player)
            .ok_or(StateError::PlayerNotFound)?;

        let mut uno = false;
        let action = if let Some(card) = choose_card(hand, &top).and_then(|i| hand.remove(i)) {
            uno = hand.len() == 1;
            table.discard.push(card);
            TurnAction::Played(card)
        } else if let Some(card) = table.deck.pop_front() {
            if card.can_play_on(&top) {
                table.discard.push(card);
                TurnAction::DrewAndPlayed(card)
            } else {
                hand.add_card(card);
                TurnAction::DrewAndKept(card)
            }
        } else {
            TurnAction::Passed
        };

        let effect = match action.discarded() {
            Some(card) => self.apply_effect(card),
            None => {
                self.advance(0);
                Effect::None
            }
        };

        Ok(Some(TurnReport {
            player,
            action,
            effect,
            uno,
            next_player: self.current_player,
        }))
    }

    /// Plays turns until the game is over or `max_turns` turns have been played.
    ///
    /// Returns the number of turns played.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been initialized.
    pub fn play_to_end(&mut self, max_turns: usize) -> Result<usize, StateError> {
        let mut turns = 0;
        while turns < max_turns && self.play_turn()?.is_some() {
            turns += 1;
        }
        Ok(turns)
    }
}
