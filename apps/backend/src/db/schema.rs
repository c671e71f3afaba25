//! PostgreSQL table definitions.
//!
//! Every statement is `CREATE ... IF NOT EXISTS`, so the whole registry can be
//! applied on each start.

/// A named table and the statement that creates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub create_sql: &'static str,
}

/// Cards. `recency` and `prevdifficulty` surface as `reviewed` and
/// `difficulty` on the wire.
pub const CARDS_TABLE: TableSchema = TableSchema {
    name: "cards",
    create_sql: r#"
        CREATE TABLE IF NOT EXISTS cards (
            id SERIAL PRIMARY KEY,
            front TEXT NOT NULL,
            back TEXT NOT NULL,
            recency BIGINT NOT NULL,
            prevdifficulty INT NOT NULL
        )
    "#,
};

pub const DECKS_TABLE: TableSchema = TableSchema {
    name: "decks",
    create_sql: r#"
        CREATE TABLE IF NOT EXISTS decks (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
    "#,
};

/// Membership join table. Either side cascades on delete.
pub const DECK_CARDS_TABLE: TableSchema = TableSchema {
    name: "deck_cards",
    create_sql: r#"
        CREATE TABLE IF NOT EXISTS deck_cards (
            card_id INT NOT NULL,
            deck_id INT NOT NULL,
            PRIMARY KEY (card_id, deck_id),
            FOREIGN KEY (card_id) REFERENCES cards(id) ON DELETE CASCADE,
            FOREIGN KEY (deck_id) REFERENCES decks(id) ON DELETE CASCADE
        )
    "#,
};

/// Tables in creation order; referenced tables come first.
pub const CURRENT_TABLES: &[TableSchema] = &[CARDS_TABLE, DECKS_TABLE, DECK_CARDS_TABLE];

#[cfg(test)]
mod tests {
    use super::*;

    fn position(name: &str) -> usize {
        CURRENT_TABLES
            .iter()
            .position(|t| t.name == name)
            .unwrap()
    }

    #[test]
    fn memberships_created_after_parents() {
        assert!(position("cards") < position("deck_cards"));
        assert!(position("decks") < position("deck_cards"));
    }

    #[test]
    fn every_statement_is_idempotent() {
        for table in CURRENT_TABLES {
            assert!(
                table
                    .create_sql
                    .contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table.name)),
                "{} is not guarded",
                table.name
            );
        }
    }

    #[test]
    fn card_columns_match_existing_stores() {
        let sql = CARDS_TABLE.create_sql;
        assert!(sql.contains("recency BIGINT NOT NULL"));
        assert!(sql.contains("prevdifficulty INT NOT NULL"));
        assert!(!sql.contains("reviewed"));
    }

    #[test]
    fn drop_order_reverses_creation() {
        let names: Vec<_> = CURRENT_TABLES.iter().rev().map(|t| t.name).collect();
        assert_eq!(names, ["deck_cards", "decks", "cards"]);
    }

    #[test]
    fn memberships_cascade_both_ways() {
        let sql = DECK_CARDS_TABLE.create_sql;
        assert!(sql.contains("REFERENCES cards(id) ON DELETE CASCADE"));
        assert!(sql.contains("REFERENCES decks(id) ON DELETE CASCADE"));
        assert!(sql.contains("PRIMARY KEY (card_id, deck_id)"));
    }
}
