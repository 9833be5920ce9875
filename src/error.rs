//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur while dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Not enough cards left to complete the deal.
    #[error("not enough cards left in the deck")]
    NotEnoughCards,
    /// The hand already holds its initial cards.
    #[error("hand has already been dealt")]
    AlreadyDealt,
}

/// Errors that can occur when a party takes another card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The hand has not received its initial cards yet.
    #[error("hand has not been dealt")]
    HandNotDealt,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<AssessError> for DrawError {
    fn from(err: AssessError) -> Self {
        match err {
            AssessError::PlayerHandNotDealt | AssessError::DealerHandNotDealt => {
                Self::HandNotDealt
            }
        }
    }
}

/// Errors that can occur when evaluating the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssessError {
    /// The player's hand has not been dealt.
    #[error("player hand has not been dealt")]
    PlayerHandNotDealt,
    /// The dealer's hand has not been dealt.
    #[error("dealer hand has not been dealt")]
    DealerHandNotDealt,
}
