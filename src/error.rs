//! Error types for engine operations.

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur while tracking the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A shoe needs at least one deck.
    #[error("a shoe needs at least one deck")]
    NoDecks,
    /// No cards of this rank remain, so it cannot be observed.
    #[error("no {0} cards remain in the shoe")]
    Exhausted(Rank),
    /// Every card of this rank is already in the shoe, so none can be returned.
    #[error("all {0} cards are already in the shoe")]
    Full(Rank),
    /// The face-down sentinel has no inventory in the shoe.
    #[error("the face-down card has no inventory in the shoe")]
    UnknownRank,
}

/// A counting system name that is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown counting system")]
pub struct UnknownCountingSystem;

/// Errors that can occur while resolving advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdviceError {
    /// The dealer's up card is still face down.
    #[error("the dealer up card is not revealed")]
    UnknownUpCard,
}

/// A card label that is not a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card rank")]
pub struct ParseRankError;

/// A chart code that is not an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid strategy action code")]
pub struct ParseActionError;

/// Errors that can occur while building a bet ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetRampError {
    /// Step thresholds must be strictly increasing.
    #[error("bet ramp thresholds are not increasing")]
    Unordered,
    /// A step bets fewer units than the step below it.
    #[error("bet ramp units decrease as the count rises")]
    Decreasing,
}

/// Errors reported by [`TrainerOptions::validate`](crate::TrainerOptions::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Deck count is zero.
    #[error("deck count must be positive")]
    NoDecks,
    /// Minimum bet exceeds the maximum bet.
    #[error("minimum bet exceeds maximum bet")]
    BetLimits,
}
