pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pages;
pub mod routes;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub config: Arc<Config>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.max_connections).await?;

    tracing::info!("Creating tables...");
    db.create_all_tables().await?;

    let addr = config.bind_addr();
    let state = AppState {
        db: Arc::new(db),
        config: Arc::new(config),
    };

    let app = build_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Full route table: pages, JSON API and static assets
pub fn build_router(state: AppState) -> Router {
    let assets = ServiceBuilder::new()
        .layer(middleware::from_fn(routes::static_files::javascript_content_type))
        .service(ServeDir::new(&state.config.static_dir));

    Router::new()
        .route("/health", get(health_check))
        // Pages
        .route("/home", get(routes::pages::home))
        .route("/projects/gol", get(routes::pages::gol))
        .route("/projects/flashcard", get(routes::pages::decks))
        .route("/projects/flashcard/random", get(routes::pages::random_card))
        .route(
            "/projects/flashcard/decks/:deck_id/study",
            get(routes::pages::study),
        )
        .route("/projects/flashcard/edit/:deck_id", get(routes::pages::edit_deck))
        // Study routes
        .route("/api/flashcard", get(routes::study::random))
        .route("/api/flashcard/rate", post(routes::study::rate))
        // Card routes
        .route(
            "/api/flashcard/cards",
            post(routes::cards::create)
                .put(routes::cards::update)
                .delete(routes::cards::delete),
        )
        .route("/api/flashcard/cards/:deck_id", get(routes::cards::list_for_deck))
        // Deck routes
        .route(
            "/api/flashcard/decks",
            get(routes::decks::list)
                .post(routes::decks::create)
                .delete(routes::decks::delete),
        )
        .route(
            "/api/flashcard/decks/:deck_id",
            delete(routes::decks::delete_by_path),
        )
        // Game of Life routes
        .route("/api/gol/patterns", get(routes::patterns::list))
        .route("/api/gol/patterns/:name", get(routes::patterns::get))
        // Static assets
        .nest_service("/static", assets.clone())
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
