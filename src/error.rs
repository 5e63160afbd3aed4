//! Error types for table operations.

use thiserror::Error;

/// Errors from hand-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
}

/// Errors that can occur while placing bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid phase for betting.
    #[error("invalid phase for betting")]
    InvalidState,
    /// Bet exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur while dealing the initial cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid phase for dealing.
    #[error("invalid phase for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// The deck ran out of cards.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid phase for this action.
    #[error("invalid phase for this action")]
    InvalidState,
    /// No hand is currently active.
    #[error("no hand is currently active")]
    NoActiveHand,
    /// The active hand has already finished.
    #[error("the active hand has already finished")]
    HandFinished,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Maximum number of split hands reached.
    #[error("maximum number of split hands reached")]
    MaxSplitsReached,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The deck ran out of cards.
    #[error("the deck is empty")]
    EmptyDeck,
}

impl From<HandError> for ActionError {
    fn from(err: HandError) -> Self {
        match err {
            HandError::CannotDouble => Self::CannotDouble,
            HandError::CannotSplit => Self::CannotSplit,
        }
    }
}

/// Errors that can occur during automated dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The deck ran out of cards while the dealer had to draw.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// Errors that can occur when starting a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid phase for starting a new round.
    #[error("invalid phase for starting a new round")]
    InvalidState,
}
