//! HTTP handlers, one module per resource

pub mod cards;
pub mod decks;
pub mod pages;
pub mod patterns;
pub mod static_files;
pub mod study;

use flashcard_core::types::validate_id;

use crate::error::{ApiError, Result};

/// Parse a numeric id from a path segment.
pub(crate) fn parse_path_id(raw: &str, what: &str) -> Result<i32> {
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::Parse(format!("invalid {what} ID: {raw:?}")))?;
    Ok(validate_id(id)?)
}
