use std::{env, fmt, str::FromStr, time::Duration};

use axum::http::HeaderValue;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} (expected one of: {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local map. Data is lost on restart.
    Memory,
    /// File-backed SQLite database.
    Sqlite,
    /// SQLite on an in-memory connection. Data is lost on restart.
    SqliteMemory,
    /// Networked PostgreSQL database.
    Postgres,
}

impl StorageBackend {
    const EXPECTED: &'static str = "memory, sqlite, sqlite-memory, postgres";

    /// Cargo feature that compiles this backend in, if any.
    pub fn cargo_feature(&self) -> Option<&'static str> {
        match self {
            Self::Memory => None,
            Self::Sqlite | Self::SqliteMemory => Some("sqlite"),
            Self::Postgres => Some("postgres"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "inmemory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            "sqlite-memory" | "sqlite_memory" => Ok(Self::SqliteMemory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(()),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Memory => "memory",
            Self::Sqlite => "sqlite",
            Self::SqliteMemory => "sqlite-memory",
            Self::Postgres => "postgres",
        };
        f.write_str(name)
    }
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend (default: sqlite)
    pub storage_backend: StorageBackend,
    /// Path to SQLite database file (default: "parts.db")
    pub sqlite_path: String,
    /// PostgreSQL connection URL (default: "postgres://localhost/partstore")
    /// Note: Only used when the `postgres` feature is enabled.
    #[allow(dead_code)]
    pub database_url: String,
    /// Maximum PostgreSQL pool size (default: 5)
    #[allow(dead_code)]
    pub database_max_connections: u32,
    /// Allowed CORS origin. `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
    /// Seed the sample parts on startup (default: true)
    pub seed_sample_data: bool,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE_BACKEND` - memory, sqlite, sqlite-memory or postgres (default: sqlite)
    /// - `SQLITE_PATH` - SQLite database path (default: "parts.db")
    /// - `DATABASE_URL` - PostgreSQL URL (default: "postgres://localhost/partstore")
    /// - `DATABASE_MAX_CONNECTIONS` - PostgreSQL pool size, at least 1 (default: 5)
    /// - `CORS_ORIGIN` - allowed origin; unset or `*` allows any origin
    /// - `SEED_SAMPLE_DATA` - seed sample parts on startup (default: true)
    /// - `REQUEST_TIMEOUT_SECONDS` - request timeout, at least 1 (default: 10)
    /// - `LOG_FORMAT` - pretty or json (default: pretty)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value
                .parse()
                .map_err(|()| ConfigError::InvalidValue {
                    key: "STORAGE_BACKEND",
                    value,
                    expected: StorageBackend::EXPECTED,
                })?,
            None => StorageBackend::Sqlite,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "LOG_FORMAT",
                    value: other.to_string(),
                    expected: "pretty, json",
                })
            }
        };

        let cors_origin = match lookup("CORS_ORIGIN").as_deref().map(str::trim) {
            None | Some("") | Some("*") => None,
            Some(origin) => Some(HeaderValue::from_str(origin).map_err(|_| {
                ConfigError::InvalidValue {
                    key: "CORS_ORIGIN",
                    value: origin.to_string(),
                    expected: "*, or a single origin such as http://localhost:5173",
                }
            })?),
        };

        Ok(Self {
            storage_backend,
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "parts.db".to_string()),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "postgres://localhost/partstore".to_string()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| parse_positive(&v))
                .unwrap_or(5),
            cors_origin,
            seed_sample_data: lookup("SEED_SAMPLE_DATA")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| parse_positive(&v))
                .unwrap_or(10),
            log_format,
        })
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    /// In-memory store without seeding. Used by tests.
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::Memory,
            sqlite_path: "parts.db".to_string(),
            database_url: "postgres://localhost/partstore".to_string(),
            database_max_connections: 5,
            cors_origin: None,
            seed_sample_data: false,
            request_timeout_seconds: 10,
            log_format: LogFormat::Pretty,
        }
    }
}

/// Parses a count or duration that must be at least 1.
fn parse_positive<T>(value: &str) -> Option<T>
where
    T: FromStr + Default + PartialOrd,
{
    value.trim().parse().ok().filter(|n| *n > T::default())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
