//! Server configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | Variable               | Default        |
//! |------------------------|----------------|
//! | `LISTEN_ADDR`          | `0.0.0.0:3000` |
//! | `SEED_SAMPLE_DATA`     | `true`         |
//! | `REQUEST_TIMEOUT_SECS` | `30`           |
//! | `LOG_FORMAT`           | `text`         |

use std::net::SocketAddr;
use std::time::Duration;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Top-level server configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Whether the store starts with the two sample records.
    pub seed_sample_data: bool,

    /// Per-request timeout applied by the HTTP middleware.
    pub request_timeout: Duration,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            seed_sample_data: true,
            request_timeout: Duration::from_secs(30),
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is unset or, except for
    /// `LISTEN_ADDR`, unparseable. Calls `dotenvy::dotenv().ok()` to
    /// optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is present but is not a valid
    /// [`SocketAddr`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, std::net::AddrParseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(raw) => raw.parse()?,
            None => defaults.listen_addr,
        };

        let seed_sample_data = parse_bool(
            lookup("SEED_SAMPLE_DATA").as_deref(),
            defaults.seed_sample_data,
        );

        let request_timeout = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map_or(defaults.request_timeout, Duration::from_secs);

        let log_format = LogFormat::parse(lookup("LOG_FORMAT").as_deref());

        Ok(Self {
            listen_addr,
            seed_sample_data,
            request_timeout,
            log_format,
        })
    }
}

/// Parses a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `default` otherwise.
fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
        _ => default,
    }
}
