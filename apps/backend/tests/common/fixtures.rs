//! Test fixtures and factory functions for creating test data.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

pub const GLIDER: &str = "#Life 1.05\n#P -1 -1\n.*.\n..*\n***\n";
pub const BLINKER: &str = "#Life 1.05\n#P -1 0\n***\n";
pub const SCRIPT: &str = "console.log(\"hello\");\n";

/// Scratch static directory:
/// `index.html`, `gol.js`, `js/app.js` and two pattern files plus a subdirectory.
pub fn static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = dir.path();

    fs::write(root.join("index.html"), "<p>index</p>").unwrap();
    fs::write(root.join("gol.js"), SCRIPT).unwrap();
    fs::write(root.join("style.css"), "body {}").unwrap();
    fs::create_dir_all(root.join("js")).unwrap();
    fs::write(root.join("js/app.js"), SCRIPT).unwrap();

    let patterns = root.join("patterns");
    fs::create_dir_all(patterns.join("archive")).unwrap();
    fs::write(patterns.join("glider.lif"), GLIDER).unwrap();
    fs::write(patterns.join("blinker.lif"), BLINKER).unwrap();

    dir
}

/// Create a card request body.
pub fn create_card_request(front: &str, back: &str, deck_id: Option<i32>) -> serde_json::Value {
    match deck_id {
        Some(id) => json!({ "front": front, "back": back, "deck_id": id }),
        None => json!({ "front": front, "back": back }),
    }
}

/// Create a full-replace card update body.
pub fn update_card_request(id: i32, front: &str, back: &str) -> serde_json::Value {
    json!({ "id": id, "front": front, "back": back, "reviewed": 0, "difficulty": 1 })
}

/// Create a deck request body.
pub fn create_deck_request(name: &str) -> serde_json::Value {
    json!({ "name": name })
}

/// Create a delete-by-id request body.
pub fn delete_request(id: i64) -> serde_json::Value {
    json!({ "id": id })
}

/// Generate a unique deck name to avoid collisions between test runs.
pub fn unique_deck_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{prefix}_{nanos}")
}
