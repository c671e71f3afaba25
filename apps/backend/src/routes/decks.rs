//! Deck endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use flashcard_core::types::{validate_deck_name, validate_id};

use crate::error::Result;
use crate::models::*;
use crate::routes::parse_path_id;
use crate::AppState;

/// GET /api/flashcard/decks
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Deck>>> {
    let decks = state.db.get_all_decks().await?;
    Ok(Json(decks))
}

/// POST /api/flashcard/decks
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateDeckRequest>, JsonRejection>,
) -> Result<Json<Deck>> {
    let Json(request) = payload?;
    validate_deck_name(&request.name)?;

    let deck = state.db.insert_deck(&request.name).await?;
    Ok(Json(deck))
}

/// DELETE /api/flashcard/decks
pub async fn delete(
    State(state): State<AppState>,
    payload: std::result::Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(request) = payload?;
    let deck_id = validate_id(request.id)?;

    state.db.delete_deck_by_id(deck_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/flashcard/decks/:deck_id
pub async fn delete_by_path(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<StatusCode> {
    let deck_id = parse_path_id(&deck_id, "deck")?;

    state.db.delete_deck_by_id(deck_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
