//! Core flashcard types shared by the site backend.
//!
//! Provides:
//! - Card and deck entities as they appear on the wire
//! - Creation-time validation (non-empty text, positive ids)

pub mod error;
pub mod types;

pub use error::{Result, ValidationError};
pub use types::{Card, Deck, NewCard};
