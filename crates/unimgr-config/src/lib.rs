//! Environment configuration for the Site Manager MCP server.
//!
//! Everything comes from the environment -- there is no config file. The
//! API key is mandatory and held as a [`SecretString`]; transport selection
//! and the HTTP listen address have working defaults.

use std::net::SocketAddr;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("UNIFI_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Transport selection ─────────────────────────────────────────────

/// How the MCP protocol is delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportMode {
    /// Full MCP over stdin/stdout.
    #[default]
    Stdio,
    /// HTTP listener: health check + acknowledgment stub only.
    Http,
}

impl TransportMode {
    /// Parse an `MCP_TRANSPORT` value. Anything that isn't `http`
    /// (case-insensitive) selects stdio.
    fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("http") {
            Self::Http
        } else {
            Self::Stdio
        }
    }
}

// ── Raw env shape ───────────────────────────────────────────────────

/// Untyped view of the environment, before validation.
#[derive(Debug, Deserialize, Serialize)]
struct RawConfig {
    api_key: Option<String>,
    api_url: String,
    transport: String,
    http_addr: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: unimgr_api::DEFAULT_BASE_URL.into(),
            transport: "stdio".into(),
            http_addr: "0.0.0.0:8000".into(),
        }
    }
}

// ── Config ──────────────────────────────────────────────────────────

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site Manager API key (`UNIFI_API_KEY`). Never logged.
    pub api_key: SecretString,

    /// Upstream base URL (`UNIFI_API_URL`).
    pub api_url: Url,

    /// Transport selection (`MCP_TRANSPORT`).
    pub transport: TransportMode,

    /// HTTP listen address (`MCP_HTTP_ADDR`), used only in HTTP mode.
    pub http_addr: SocketAddr,
}

impl Config {
    /// Load and validate configuration from the environment.
    ///
    /// A missing or empty `UNIFI_API_KEY` is an error -- callers treat it as
    /// fatal before any server setup happens.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(RawConfig::default()))
            .merge(Env::prefixed("UNIFI_"))
            .merge(Env::prefixed("MCP_"))
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let raw: RawConfig = figment.extract()?;

        let key = raw
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let api_url: Url = raw.api_url.parse().map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", raw.api_url),
        })?;

        let http_addr: SocketAddr =
            raw.http_addr.parse().map_err(|_| ConfigError::Validation {
                field: "http_addr".into(),
                reason: format!("invalid listen address: {}", raw.http_addr),
            })?;

        Ok(Self {
            api_key: SecretString::from(key),
            api_url,
            transport: TransportMode::parse(&raw.transport),
            http_addr,
        })
    }
}
