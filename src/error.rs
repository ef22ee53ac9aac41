//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while entering bids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidError {
    /// No round exists at the given position.
    #[error("round not found")]
    RoundNotFound,
    /// Seat index is outside `0..4`.
    #[error("player not found")]
    PlayerNotFound,
    /// A single bid is larger than the number of cards dealt.
    #[error("bid exceeds the cards dealt this round")]
    BidExceedsCardsDealt,
    /// The bids would add up to exactly the number of cards dealt.
    #[error("bids must not add up to the cards dealt")]
    SumEqualsCardsDealt,
    /// The game has already been completed.
    #[error("game is already completed")]
    GameCompleted,
}

/// Errors that can occur while recording tricks taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TricksError {
    /// No round exists at the given position.
    #[error("round not found")]
    RoundNotFound,
    /// Seat index is outside `0..4`.
    #[error("player not found")]
    PlayerNotFound,
    /// More tricks than cards dealt.
    #[error("tricks exceed the cards dealt this round")]
    TricksExceedCardsDealt,
    /// The game has already been completed.
    #[error("game is already completed")]
    GameCompleted,
}

/// Errors that can occur when completing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompleteError {
    /// The game was completed before.
    #[error("game is already completed")]
    AlreadyCompleted,
}

/// Errors reported by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("store is unavailable")]
    Unavailable,
    /// The backend refused the write (quota, permissions, ...).
    #[error("store rejected the write")]
    WriteRejected,
}
