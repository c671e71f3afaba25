//! Card endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header::REFERER, HeaderMap, StatusCode},
    Json,
};
use flashcard_core::types::validate_id;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::parse_path_id;
use crate::AppState;

const EDIT_PAGE_PREFIX: &str = "/projects/flashcard/edit/";

/// GET /api/flashcard/cards/:deck_id
pub async fn list_for_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<Vec<Card>>> {
    let deck_id = parse_path_id(&deck_id, "deck")?;
    let cards = state.db.get_cards_from_deck(deck_id).await?;
    Ok(Json(cards))
}

/// POST /api/flashcard/cards
/// Inserts the card, then links it to the target deck
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: std::result::Result<Json<CreateCardRequest>, JsonRejection>,
) -> Result<Json<CardResponse>> {
    let Json(request) = payload?;
    let new_card = NewCard::new(request.front, request.back)?;

    let deck_id = match request.deck_id {
        Some(id) => validate_id(id)?,
        None => deck_id_from_referer(&headers)?,
    };

    let card = state.db.insert_card(&new_card).await?;

    tracing::info!("Adding card {} to deck {}", card.id, deck_id);
    state.db.add_card_to_deck(card.id, deck_id).await?;

    Ok(Json(CardResponse {
        message: "Card created and added to deck successfully".to_string(),
        card,
    }))
}

/// PUT /api/flashcard/cards
pub async fn update(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Card>, JsonRejection>,
) -> Result<Json<CardResponse>> {
    let Json(card) = payload?;
    card.validate_update()?;

    state.db.update_card(&card).await?;

    Ok(Json(CardResponse {
        message: "Card updated successfully".to_string(),
        card,
    }))
}

/// DELETE /api/flashcard/cards
pub async fn delete(
    State(state): State<AppState>,
    payload: std::result::Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(request) = payload?;
    let card_id = validate_id(request.id)?;

    state.db.delete_card_by_id(card_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deck id of the editor page that submitted the card.
fn deck_id_from_referer(headers: &HeaderMap) -> Result<i32> {
    let invalid = || ApiError::BadRequest("invalid deck ID in Referer".to_string());

    let referer = headers
        .get(REFERER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest("missing deck ID".to_string()))?;

    let start = referer.find(EDIT_PAGE_PREFIX).ok_or_else(invalid)? + EDIT_PAGE_PREFIX.len();
    let segment = referer[start..]
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    let id: i64 = segment.parse().map_err(|_| invalid())?;
    Ok(validate_id(id)?)
}
