//! Server configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`):
//!
//! | Variable          | Default        |
//! |-------------------|----------------|
//! | `LISTEN_ADDR`     | `0.0.0.0:3000` |
//! | `API_PREFIX`      | `/api/v1`      |
//! | `OPENAPI_ENABLED` | `true`         |

use std::net::SocketAddr;

use crate::error::ConfigError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Top-level server configuration.
///
/// Loaded once at startup via [`RouterConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Socket address to bind the HTTP server to.
    pub listen_addr: SocketAddr,

    /// Prefix every registered route is mounted under.
    pub api_prefix: String,

    /// Serve the OpenAPI document (and Swagger UI when compiled in).
    pub openapi_enabled: bool,
}

impl RouterConfig {
    /// Loads configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv().ok()` first to optionally load a `.env`
    /// file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidListenAddr`] if `LISTEN_ADDR` is set
    /// but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidListenAddr`] if `LISTEN_ADDR` is set
    /// but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let api_prefix = lookup("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());
        let openapi_enabled = parse_bool(lookup("OPENAPI_ENABLED").as_deref(), true);

        Ok(Self {
            listen_addr,
            api_prefix,
            openapi_enabled,
        })
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            openapi_enabled: true,
        }
    }
}

/// Accepts `"true"`, `"1"`, `"false"`, `"0"` (case-insensitive). Returns
/// `default` otherwise.
fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}
