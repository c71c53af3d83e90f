//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Every key has a default, so an empty
//! environment starts the service with the built-in category table.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

use crate::domain::CategoryTable;

/// Top-level service configuration.
///
/// Loaded once at startup via [`DrawConfig::from_env`].
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,

    /// Optional JSON category table; the built-in table is used when unset.
    pub category_table_path: Option<PathBuf>,

    /// Take the participant address from `X-Forwarded-For` instead of the
    /// socket peer. Only safe behind a proxy that overwrites the header.
    pub trust_forwarded_for: bool,

    /// Whether the isolated rehearsal draw endpoints are mounted.
    pub rehearsal_enabled: bool,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            event_bus_capacity: 1024,
            category_table_path: None,
            trust_forwarded_for: false,
            rehearsal_enabled: true,
            log_json: false,
        }
    }
}

impl DrawConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("LISTEN_ADDR {raw:?} is not a socket address"))?,
            Err(_) => defaults.listen_addr,
        };

        let category_table_path = std::env::var("CATEGORY_TABLE_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            event_bus_capacity: parse_env("EVENT_BUS_CAPACITY", defaults.event_bus_capacity),
            category_table_path,
            trust_forwarded_for: parse_env_bool(
                "TRUST_FORWARDED_FOR",
                defaults.trust_forwarded_for,
            ),
            rehearsal_enabled: parse_env_bool("REHEARSAL_ENABLED", defaults.rehearsal_enabled),
            log_json: std::env::var("LOG_FORMAT")
                .is_ok_and(|format| format.trim().eq_ignore_ascii_case("json")),
        })
    }

    /// Loads the category table named by [`Self::category_table_path`], or
    /// the built-in table when no path is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// category table.
    pub fn load_category_table(&self) -> anyhow::Result<CategoryTable> {
        let Some(path) = &self.category_table_path else {
            return Ok(CategoryTable::builtin());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading category table {}", path.display()))?;
        let table = CategoryTable::from_json(&json)
            .with_context(|| format!("parsing category table {}", path.display()))?;
        Ok(table)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key)
        .ok()
        .map(|v| v.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}
