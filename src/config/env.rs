//! Environment variable loading.
//!
//! Values are collected as raw strings first so YAML overrides can be
//! layered on top before anything is parsed or validated.

/// Play.ht user ID (required)
pub const ENV_USER_ID: &str = "USER_ID";
/// Play.ht API key (required)
pub const ENV_API_KEY: &str = "API_KEY";
/// Voice engine the page streams from
pub const ENV_MODEL: &str = "MODEL";
/// Websocket-auth revision, `v3` or `v4`
pub const ENV_API_VERSION: &str = "PLAYHT_API_VERSION";
/// Websocket-auth endpoint override
pub const ENV_AUTH_URL: &str = "PLAYHT_WS_AUTH_URL";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
/// HTML page template location
pub const ENV_TEMPLATE_PATH: &str = "TEMPLATE_PATH";

/// Unvalidated configuration values.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawConfig {
    pub user_id: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_version: Option<String>,
    pub auth_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub template_path: Option<String>,
}

impl RawConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            user_id: lookup(ENV_USER_ID),
            api_key: lookup(ENV_API_KEY),
            model: lookup(ENV_MODEL),
            api_version: lookup(ENV_API_VERSION),
            auth_url: lookup(ENV_AUTH_URL),
            host: lookup(ENV_HOST),
            port: lookup(ENV_PORT),
            template_path: lookup(ENV_TEMPLATE_PATH),
        }
    }
}

/// Reads a variable from the process environment.
///
/// Non-unicode values are treated as unset.
pub(crate) fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
