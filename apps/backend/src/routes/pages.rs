//! Page routes - server-rendered HTML

use axum::{extract::Path, response::Html};

use crate::error::{ApiError, Result};
use crate::pages;

/// GET /home
pub async fn home() -> Html<String> {
    Html(pages::home_page())
}

/// GET /projects/gol
pub async fn gol() -> Html<String> {
    Html(pages::gol_page())
}

/// GET /projects/flashcard
pub async fn decks() -> Html<String> {
    Html(pages::decks_page())
}

/// GET /projects/flashcard/random
pub async fn random_card() -> Html<String> {
    Html(pages::random_card_page())
}

/// GET /projects/flashcard/decks/:deck_id/study
pub async fn study(Path(deck_id): Path<String>) -> Result<Html<String>> {
    Ok(Html(pages::study_page(page_deck_id(&deck_id)?)))
}

/// GET /projects/flashcard/edit/:deck_id
pub async fn edit_deck(Path(deck_id): Path<String>) -> Result<Html<String>> {
    Ok(Html(pages::edit_deck_page(page_deck_id(&deck_id)?)))
}

/// Deck pages only exist for all-digit ids.
fn page_deck_id(raw: &str) -> Result<i32> {
    let not_found = || ApiError::NotFound("page not found".to_string());
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    raw.parse().map_err(|_| not_found())
}
