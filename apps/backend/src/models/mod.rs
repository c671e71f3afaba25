//! Database models and API types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from flashcard-core
pub use flashcard_core::types::{Card, Deck, NewCard};

// === Database Entity Types ===

/// Card row in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct DbCard {
    pub id: i32,
    pub front: String,
    pub back: String,
    #[sqlx(rename = "recency")]
    pub reviewed: i64,
    #[sqlx(rename = "prevdifficulty")]
    pub difficulty: i32,
}

impl DbCard {
    pub fn into_card(self) -> Card {
        Card {
            id: self.id,
            front: self.front,
            back: self.back,
            reviewed: self.reviewed,
            difficulty: self.difficulty,
        }
    }
}

/// Deck row in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct DbDeck {
    pub id: i32,
    pub name: String,
}

impl DbDeck {
    pub fn into_deck(self) -> Deck {
        Deck {
            id: self.id,
            name: self.name,
        }
    }
}

// === API Request/Response Types ===

// Card types
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub front: String,
    pub back: String,
    /// Falls back to the deck editor page in the `Referer` header.
    pub deck_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardResponse {
    pub message: String,
    pub card: Card,
}

// Shared by card and deck deletes
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: i64,
}

// Deck types
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateDeckRequest {
    pub name: String,
}

// Study types

/// Form body of `POST /api/flashcard/rate`. Values stay raw so bad numbers
/// get their own messages.
#[derive(Debug, Deserialize)]
pub struct RateForm {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Rating", default)]
    pub rating: String,
}

// Pattern types
#[derive(Debug, Serialize, Deserialize)]
pub struct PatternFile {
    pub filename: String,
    pub contents: String,
}
