//! Play.ht websocket authentication.
//!
//! The server never streams audio itself. It asks Play.ht for a signed,
//! time-limited websocket URL and hands that URL to the browser, which then
//! talks to Play.ht directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use tts_websocket::core::playht::{ApiVersion, PlayHtAuthClient, PlayHtModel, WebSocketAuth};
//!
//! let client = PlayHtAuthClient::new("user-id", "api-key", ApiVersion::V4);
//! let response = client.authenticate().await?;
//! let url = response.websocket_url_for(PlayHtModel::PlayDialog);
//! ```
//!
//! # API Reference
//!
//! - WebSocket Auth (single URL): `POST https://api.play.ht/api/v3/websocket-auth`
//! - WebSocket Auth (per model):  `POST https://api.play.ht/api/v4/websocket-auth`
//!
//! # Authentication
//!
//! Play.ht uses dual-header authentication:
//! - `X-User-Id`: Your Play.ht user ID
//! - `Authorization`: `Bearer <API key>`

pub mod client;
pub mod config;
pub mod messages;

pub use client::{PlayHtAuthClient, PlayHtError, WebSocketAuth};
pub use config::{ApiVersion, PlayHtModel};
pub use messages::{PlayHtApiError, WsAuthResponse, WsAuthResponseV3, WsAuthResponseV4};

// =============================================================================
// API Constants
// =============================================================================

/// Play.ht v3 WebSocket authentication endpoint.
///
/// Returns a single websocket URL valid for every voice engine.
pub const PLAYHT_WS_AUTH_URL_V3: &str = "https://api.play.ht/api/v3/websocket-auth";

/// Play.ht v4 WebSocket authentication endpoint.
///
/// Returns one websocket URL per voice engine.
pub const PLAYHT_WS_AUTH_URL_V4: &str = "https://api.play.ht/api/v4/websocket-auth";

/// Header carrying the Play.ht user ID.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Default model (voice engine).
pub const DEFAULT_MODEL: PlayHtModel = PlayHtModel::Play30Mini;
