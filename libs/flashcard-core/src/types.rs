//! Core types for the flashcard site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// A front/back flashcard with review metadata.
///
/// `reviewed` is a unix timestamp in seconds. `difficulty` is carried for a
/// future scheduler and is never computed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: i32,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub reviewed: i64,
    #[serde(default)]
    pub difficulty: i32,
}

impl Card {
    /// Check a card submitted for a full-replace update.
    pub fn validate_update(&self) -> Result<()> {
        if self.id <= 0 {
            return Err(ValidationError::InvalidId(self.id.into()));
        }
        check_card_text(&self.front, &self.back)
    }
}

/// A card that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub front: String,
    pub back: String,
    pub reviewed: i64,
    pub difficulty: i32,
}

impl NewCard {
    /// New card stamped with the current time and zero difficulty.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Result<Self> {
        Self::reviewed_at(front, back, Utc::now())
    }

    pub fn reviewed_at(
        front: impl Into<String>,
        back: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<Self> {
        let front = front.into();
        let back = back.into();
        check_card_text(&front, &back)?;

        Ok(Self {
            front,
            back,
            reviewed: at.timestamp(),
            difficulty: 0,
        })
    }

    /// Attach the id assigned by the store.
    pub fn into_card(self, id: i32) -> Card {
        Card {
            id,
            front: self.front,
            back: self.back,
            reviewed: self.reviewed,
            difficulty: self.difficulty,
        }
    }
}

/// A named collection of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: i32,
    pub name: String,
}

/// Deck names must not be empty.
pub fn validate_deck_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyDeckName);
    }
    Ok(())
}

/// Ids sent by clients must be positive.
pub fn validate_id(id: i64) -> Result<i32> {
    match i32::try_from(id) {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidId(id)),
    }
}

fn check_card_text(front: &str, back: &str) -> Result<()> {
    if front.is_empty() || back.is_empty() {
        return Err(ValidationError::EmptyCardText);
    }
    Ok(())
}
