//! Environment-driven server configuration

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::Context;
use tracing::info;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/flashcard";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Root of the static assets, served at `/static` and as the fallback.
    pub static_dir: PathBuf,
    /// Game of Life pattern files, one pattern per file.
    pub patterns_dir: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let static_dir = PathBuf::from(load_or(&lookup, "STATIC_DIR", "static"));
        let patterns_dir = lookup("PATTERNS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| static_dir.join("patterns"));

        Ok(Self {
            database_url: load_or(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL),
            host: load_or(&lookup, "HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 8080)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            static_dir,
            patterns_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn load_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid {key} value: {raw:?}")),
        None => Ok(default),
    }
}
