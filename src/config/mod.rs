//! Configuration module for the tts-websocket server
//!
//! Handles configuration from .env files, YAML files, and environment
//! variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! The configuration is read once at startup. Any error here is fatal: the
//! binary reports it and exits before a listener is bound.
//!
//! # Example
//! ```rust,no_run
//! use tts_websocket::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable base
//! let config = ServerConfig::from_file(&PathBuf::from("config.yaml"))?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::core::playht::{ApiVersion, DEFAULT_MODEL, PlayHtModel};

mod env;
mod yaml;

pub use env::{
    ENV_API_KEY, ENV_API_VERSION, ENV_AUTH_URL, ENV_HOST, ENV_MODEL, ENV_PORT,
    ENV_TEMPLATE_PATH, ENV_USER_ID,
};
pub use yaml::YamlConfig;

use env::RawConfig;

/// Default bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;

/// Default page template, shipped with the crate
pub const DEFAULT_TEMPLATE_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/static/websocket.html");

/// Instruction printed after the per-variable diagnostics for missing credentials
pub const MISSING_CREDENTIALS_HINT: &str = "One or more required environment variables are \
     missing. Please create an .env file similar to the .env.example file.";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error(
        "invalid MODEL '{0}'. Accepted values: {accepted}",
        accepted = PlayHtModel::accepted_values()
    )]
    InvalidModel(String),

    #[error("invalid PLAYHT_API_VERSION '{0}' (expected v3 or v4)")]
    InvalidApiVersion(String),

    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error("invalid PLAYHT_WS_AUTH_URL '{url}': {reason}")]
    InvalidAuthUrl { url: String, reason: String },

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Server configuration
///
/// Holds the Play.ht credentials, the model the page streams from, the
/// websocket-auth endpoint, the bind address and the page template path.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Play.ht credentials
    pub user_id: String,
    pub api_key: String,

    // Play.ht endpoint selection
    pub model: PlayHtModel,
    pub api_version: ApiVersion,
    /// Websocket-auth endpoint; the public endpoint of `api_version` unless overridden
    pub auth_url: String,

    /// HTML page containing the placeholder tokens
    pub template_path: PathBuf,
}

/// Zeroize the API key when the configuration is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.api_key.zeroize();
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// `.env` is expected to have been loaded already (see `main.rs`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env::process_env)
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use tts_websocket::config::ServerConfig;
    ///
    /// let vars = HashMap::from([("USER_ID", "user"), ("API_KEY", "key")]);
    /// let config = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.port, 8080);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_raw(RawConfig::from_lookup(lookup))
    }

    /// Load configuration from a YAML file with the environment as base.
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_file_with_lookup(path, env::process_env)
    }

    pub fn from_file_with_lookup<F>(path: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut raw = RawConfig::from_lookup(lookup);
        YamlConfig::from_file(path)?.apply(&mut raw);
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let user_id = non_empty(raw.user_id);
        let api_key = non_empty(raw.api_key);

        let (user_id, api_key) = match (user_id, api_key) {
            (Some(user_id), Some(api_key)) => (user_id, api_key),
            (user_id, api_key) => {
                let mut missing = Vec::new();
                if user_id.is_none() {
                    missing.push(ENV_USER_ID);
                }
                if api_key.is_none() {
                    missing.push(ENV_API_KEY);
                }
                return Err(ConfigError::MissingCredentials(missing));
            }
        };

        let model = match non_empty(raw.model) {
            Some(name) => name
                .parse::<PlayHtModel>()
                .map_err(|e| ConfigError::InvalidModel(e.0))?,
            None => DEFAULT_MODEL,
        };

        let api_version = match non_empty(raw.api_version) {
            Some(v) => v
                .parse::<ApiVersion>()
                .map_err(|e| ConfigError::InvalidApiVersion(e.0))?,
            None => ApiVersion::default(),
        };

        let auth_url = match non_empty(raw.auth_url) {
            Some(url) => validate_auth_url(url)?,
            None => api_version.default_auth_url().to_string(),
        };

        let port = match non_empty(raw.port) {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(p))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty(raw.host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            user_id,
            api_key,
            model,
            api_version,
            auth_url,
            template_path: non_empty(raw.template_path)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH)),
        })
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// User ID safe to print: first four characters followed by `...`
    pub fn masked_user_id(&self) -> String {
        mask_secret(&self.user_id)
    }

    /// API key safe to print: first four characters followed by `...`
    pub fn masked_api_key(&self) -> String {
        mask_secret(&self.api_key)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_auth_url(url: String) -> Result<String, ConfigError> {
    match Url::parse(&url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(url),
        Ok(parsed) => Err(ConfigError::InvalidAuthUrl {
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
            url,
        }),
        Err(e) => Err(ConfigError::InvalidAuthUrl {
            reason: e.to_string(),
            url,
        }),
    }
}

/// Keeps the first four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}...")
}
