//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons a card or deck is refused at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("front and back content cannot be empty")]
    EmptyCardText,

    #[error("deck name cannot be empty")]
    EmptyDeckName,

    #[error("invalid id: {0}")]
    InvalidId(i64),
}
