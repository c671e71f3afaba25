//! Game of Life pattern endpoints

use std::io::ErrorKind;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::PatternFile;
use crate::AppState;

/// GET /api/gol/patterns
/// Names of the pattern files, sorted
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let dir = &state.config.patterns_dir;
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ApiError::Internal(format!("reading {}: {}", dir.display(), e)))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ApiError::Internal(format!("reading {}: {}", dir.display(), e)))?
    {
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if is_file {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    Ok(Json(names))
}

/// GET /api/gol/patterns/:name
pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PatternFile>> {
    check_pattern_name(&name)?;

    let path = state.config.patterns_dir.join(&name);
    let contents = match tokio::fs::read(&path).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ApiError::NotFound("File does not exist".to_string()))
        }
        Err(e) => return Err(ApiError::Internal(format!("reading {}: {}", path.display(), e))),
    };

    Ok(Json(PatternFile {
        filename: name,
        contents,
    }))
}

/// Pattern names are bare file names inside the patterns directory.
fn check_pattern_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ApiError::BadRequest("No file name provided".to_string()));
    }
    if name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(ApiError::BadRequest(format!("invalid pattern name: {name}")));
    }
    Ok(())
}
