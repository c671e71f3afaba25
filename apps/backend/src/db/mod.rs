//! PostgreSQL database operations

pub mod schema;

use rand::Rng;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{ApiError, Result};
use crate::models::*;
use schema::{TableSchema, CURRENT_TABLES};

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a pool that only connects on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Schema ===

    /// Create one table from its registry entry
    pub async fn create_table(&self, table: &TableSchema) -> Result<()> {
        sqlx::query(table.create_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::Schema(format!("error creating table {}: {}", table.name, e)))?;
        Ok(())
    }

    /// Apply every table definition in order, stopping at the first failure
    pub async fn create_all_tables(&self) -> Result<()> {
        for table in CURRENT_TABLES {
            self.create_table(table).await?;
        }
        Ok(())
    }

    /// Drop one table along with anything that depends on it
    pub async fn drop_table(&self, table: &TableSchema) -> Result<()> {
        sqlx::query(&format!("DROP TABLE IF EXISTS {} CASCADE", table.name))
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::Schema(format!("error dropping table {}: {}", table.name, e)))?;

        tracing::info!("Dropped table {}", table.name);
        Ok(())
    }

    /// Drop every registered table, dependents first
    pub async fn drop_all_tables(&self) -> Result<()> {
        for table in CURRENT_TABLES.iter().rev() {
            self.drop_table(table).await?;
        }
        Ok(())
    }

    // === Card Repository ===

    /// Insert a single card and return it with its assigned id
    pub async fn insert_card(&self, card: &NewCard) -> Result<Card> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO cards (front, back, recency, prevdifficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&card.front)
        .bind(&card.back)
        .bind(card.reviewed)
        .bind(card.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(card.clone().into_card(id))
    }

    /// Insert cards one statement at a time.
    ///
    /// Rows inserted before a failure stay committed.
    pub async fn insert_cards(&self, cards: &[NewCard]) -> Result<Vec<i32>> {
        let mut ids = Vec::with_capacity(cards.len());
        for card in cards {
            ids.push(self.insert_card(card).await?.id);
        }
        Ok(ids)
    }

    /// Get card by ID
    pub async fn get_card(&self, card_id: i32) -> Result<Option<Card>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, front, back, recency, prevdifficulty
            FROM cards
            WHERE id = $1
            "#,
        )
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card.map(DbCard::into_card))
    }

    /// Pick a card uniformly among the stored ones.
    ///
    /// Counts the rows, then takes a random offset into the id-ordered list,
    /// so gaps left by deletes do not matter.
    pub async fn get_random_card(&self) -> Result<Option<Card>> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cards")
            .fetch_one(&self.pool)
            .await?;

        let Some(offset) = random_offset(count, &mut rand::thread_rng()) else {
            return Ok(None);
        };

        // A concurrent delete can shrink the table after the count.
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, front, back, recency, prevdifficulty
            FROM cards
            ORDER BY id
            OFFSET $1
            LIMIT 1
            "#,
        )
        .bind(offset)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card.map(DbCard::into_card))
    }

    /// Get all cards that belong to a deck
    pub async fn get_cards_from_deck(&self, deck_id: i32) -> Result<Vec<Card>> {
        let cards = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT c.id, c.front, c.back, c.recency, c.prevdifficulty
            FROM cards c
            JOIN deck_cards dc ON c.id = dc.card_id
            WHERE dc.deck_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(deck_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cards.into_iter().map(DbCard::into_card).collect())
    }

    /// Replace a card's contents by id. Missing ids are not an error.
    pub async fn update_card(&self, card: &Card) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE cards
            SET front = $2, back = $3, recency = $4, prevdifficulty = $5
            WHERE id = $1
            "#,
        )
        .bind(card.id)
        .bind(&card.front)
        .bind(&card.back)
        .bind(card.reviewed)
        .bind(card.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a card and, through the cascade, its memberships
    pub async fn delete_card_by_id(&self, card_id: i32) -> Result<()> {
        sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(card_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // === Deck Repository ===

    /// Insert a deck. The caller checks the name first.
    pub async fn insert_deck(&self, name: &str) -> Result<Deck> {
        let deck = sqlx::query_as::<_, DbDeck>(
            r#"
            INSERT INTO decks (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(deck.into_deck())
    }

    /// Get all decks
    pub async fn get_all_decks(&self) -> Result<Vec<Deck>> {
        let decks = sqlx::query_as::<_, DbDeck>(
            r#"
            SELECT id, name
            FROM decks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(decks.into_iter().map(DbDeck::into_deck).collect())
    }

    /// Get every deck a card is a member of
    pub async fn get_decks_for_card(&self, card_id: i32) -> Result<Vec<Deck>> {
        let decks = sqlx::query_as::<_, DbDeck>(
            r#"
            SELECT d.id, d.name
            FROM decks d
            JOIN deck_cards dc ON d.id = dc.deck_id
            WHERE dc.card_id = $1
            ORDER BY d.id
            "#,
        )
        .bind(card_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(decks.into_iter().map(DbDeck::into_deck).collect())
    }

    /// Delete a deck and, through the cascade, its memberships
    pub async fn delete_deck_by_id(&self, deck_id: i32) -> Result<()> {
        sqlx::query("DELETE FROM decks WHERE id = $1")
            .bind(deck_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // === Membership Repository ===

    /// Link a card to a deck; linking an existing pair is a no-op.
    ///
    /// Returns whether a new membership row was written.
    pub async fn add_card_to_deck(&self, card_id: i32, deck_id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO deck_cards (card_id, deck_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(card_id)
        .bind(deck_id)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_foreign_key_violation() => ApiError::BadRequest(format!(
                "failed to add card {card_id} to deck {deck_id}: card or deck does not exist"
            )),
            _ => ApiError::Database(e),
        })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Choose a row offset in `0..count`, or `None` when there are no rows.
pub fn random_offset<R: Rng + ?Sized>(count: i64, rng: &mut R) -> Option<i64> {
    if count <= 0 {
        return None;
    }
    Some(rng.gen_range(0..count))
}
