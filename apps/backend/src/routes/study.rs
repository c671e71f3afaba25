//! Study endpoints

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    Form, Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/flashcard
/// Returns a random card from all decks
pub async fn random(State(state): State<AppState>) -> Result<Json<Card>> {
    let card = state
        .db
        .get_random_card()
        .await?
        .ok_or_else(|| ApiError::NotFound("no cards to study".to_string()))?;

    Ok(Json(card))
}

/// POST /api/flashcard/rate
///
/// Ratings are only logged; no scheduling state is kept.
pub async fn rate(payload: std::result::Result<Form<RateForm>, FormRejection>) -> Result<StatusCode> {
    let Form(form) = payload?;

    let card_id: i64 = form
        .id
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid ID".to_string()))?;
    let rating: i64 = form
        .rating
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid Rating".to_string()))?;

    tracing::info!(card_id, rating, "Card rated");

    Ok(StatusCode::OK)
}
