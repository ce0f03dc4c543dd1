use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::playht::{PlayHtAuthClient, WebSocketAuth};

/// Shared, read-only application state.
pub struct AppState {
    pub config: ServerConfig,
    pub auth: Arc<dyn WebSocketAuth>,
}

impl AppState {
    /// Builds the state with a Play.ht client for the configured endpoint.
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let auth = PlayHtAuthClient::with_url(
            config.user_id.clone(),
            config.api_key.clone(),
            config.api_version,
            config.auth_url.clone(),
        );
        Self::with_auth(config, Arc::new(auth))
    }

    /// Builds the state around an existing auth source.
    pub fn with_auth(config: ServerConfig, auth: Arc<dyn WebSocketAuth>) -> Arc<Self> {
        Arc::new(Self { config, auth })
    }
}
