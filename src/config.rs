//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Naver Shopping search endpoint.
pub const NAVER_SHOP_API_URL: &str = "https://openapi.naver.com/v1/search/shop.json";

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream search endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Display count used when the client sends none
    #[serde(default = "default_display")]
    pub default_display: i64,

    /// API credentials, only ever read from the environment
    #[serde(skip)]
    pub credentials: Credentials,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_api_url() -> String {
    NAVER_SHOP_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_display() -> i64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            default_display: default_display(),
            credentials: Credentials::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("lowprice.toml");
        if local_config.exists() {
            debug!("Found lowprice.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("lowprice").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides, including API credentials.
    pub fn with_env(mut self) -> Self {
        if let Ok(host) = std::env::var("LOWPRICE_HOST") {
            self.host = host;
        }

        if let Ok(port) = std::env::var("LOWPRICE_PORT") {
            if let Ok(p) = port.parse() {
                self.port = p;
            }
        }

        if let Ok(url) = std::env::var("LOWPRICE_API_URL") {
            self.api_url = url;
        }

        if let Ok(timeout) = std::env::var("LOWPRICE_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        self.credentials = Credentials::from_env();
        self
    }

    /// Upstream request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Socket address string for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The two static values sent with every upstream call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), client_secret: client_secret.into() }
    }

    /// Reads `NAVER_CLIENT_ID` and `NAVER_CLIENT_SECRET`; unset values stay empty.
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var("NAVER_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("NAVER_CLIENT_SECRET").unwrap_or_default(),
        }
    }

    /// Returns true if both values are present.
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &if self.client_secret.is_empty() { "" } else { "***" })
            .finish()
    }
}
