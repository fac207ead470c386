//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player count outside the supported range.
    #[error("players must be between 2 and 4, got {0}")]
    InvalidPlayerCount(usize),
}

/// Errors that can occur while dealing a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    /// The deck holds no numbered card to start the discard pile.
    #[error("no numbered card available to start the discard pile")]
    NoStarterCard,
}

/// Errors that can occur when playing or querying a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// The game has not been dealt yet.
    #[error("game has not been initialized")]
    Uninitialized,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}
