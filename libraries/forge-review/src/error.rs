//! Error types for the review engine

use forge_core::CardId;
use thiserror::Error;

/// Review engine errors
#[derive(Debug, Error)]
pub enum ReviewError {
    /// A review session needs at least one card
    #[error("Session has no cards")]
    EmptyQueue,

    /// The card id is not part of this session's queue
    #[error("Unknown card: {0}")]
    UnknownCard(CardId),

    /// The card has no visual analogy to illustrate from
    #[error("Card {0} has no visual analogy")]
    NoAnalogy(CardId),

    /// A quiz session needs at least one question
    #[error("Quiz has no questions")]
    EmptyQuiz,
}

/// Result type for review operations
pub type Result<T> = std::result::Result<T, ReviewError>;
