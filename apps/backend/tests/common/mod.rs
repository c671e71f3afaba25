//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up the app with or without a live database
//! - A scratch static directory with Game of Life patterns
//!
//! # Requirements
//! Tests built with `TestContext::new()` need PostgreSQL (set DATABASE_URL).
//! `TestContext::without_database()` never opens a connection.

pub mod fixtures;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use flashcard_site_backend::config::Config;
use flashcard_site_backend::db::Database;
use flashcard_site_backend::{build_router, AppState};

/// Test context containing database handle, scratch assets and router.
pub struct TestContext {
    pub db: Arc<Database>,
    pub static_dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Create a test context backed by the database in DATABASE_URL.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or the tables cannot be created.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url, 5)
            .await
            .expect("Failed to connect to test database");

        db.create_all_tables()
            .await
            .expect("Failed to create tables");

        Self::with_database(db)
    }

    /// Create a test context whose pool never connects.
    ///
    /// Any handler that reaches the database fails with a 500.
    pub async fn without_database() -> Self {
        let db = Database::connect_lazy("postgres://localhost:1/unused")
            .expect("Failed to create lazy pool");

        Self::with_database(db)
    }

    fn with_database(db: Database) -> Self {
        let static_dir = fixtures::static_dir();
        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            config: Arc::new(test_config(static_dir.path())),
        };

        let app = build_router(state);

        Self { db, static_dir, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Count membership rows for a card.
    pub async fn membership_count(&self, card_id: i32) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM deck_cards WHERE card_id = $1")
            .bind(card_id)
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count memberships")
    }

    /// Remove a deck created by a test. Memberships cascade.
    pub async fn cleanup_deck(&self, deck_id: i32) {
        let _ = self.db.delete_deck_by_id(deck_id).await;
    }

    /// Remove cards created by a test.
    pub async fn cleanup_cards(&self, card_ids: &[i32]) {
        for id in card_ids {
            let _ = self.db.delete_card_by_id(*id).await;
        }
    }
}

fn test_config(static_dir: &Path) -> Config {
    Config {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        max_connections: 5,
        static_dir: static_dir.to_path_buf(),
        patterns_dir: static_dir.join("patterns"),
    }
}
