//! A deterministic UNO turn engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck, the discard pile and
//! every player's hand, and plays the game one turn at a time using a fixed,
//! rule-based card choice. Shuffling is driven by a seeded generator, so the
//! same options always produce the same game.
//!
//! # Example
//!
//! ```
//! use unors::Game;
//!
//! let mut game = Game::new(2).unwrap();
//! game.initialize().unwrap();
//! while !game.is_game_over().unwrap() {
//!     game.play_turn().unwrap();
//! }
//! let _winner = game.winner().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod discard;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{ACTION_VALUES, COLORS, Card, Color, DECK_SIZE, Value};
pub use discard::DiscardPile;
pub use error::{InitError, SetupError, StateError};
pub use game::{Direction, Game, GameState, Snapshot};
pub use hand::Hand;
pub use options::{DEFAULT_HAND_SIZE, DEFAULT_SEED, GameOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use result::{Effect, TurnAction, TurnReport};
