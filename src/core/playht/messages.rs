//! Play.ht websocket-auth wire types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::config::{ApiVersion, PlayHtModel};

// =============================================================================
// WebSocket Auth Responses
// =============================================================================

/// Response of `POST /api/v3/websocket-auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WsAuthResponseV3 {
    /// Websocket URL usable with every voice engine
    pub websocket_url: String,

    /// Expiration time for the auth token
    pub expires_at: String,

    /// Any other fields the provider sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `POST /api/v4/websocket-auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WsAuthResponseV4 {
    /// Map of voice engine to websocket URL
    pub websocket_urls: BTreeMap<String, String>,

    /// Expiration time for the auth token
    pub expires_at: String,

    /// Any other fields the provider sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WsAuthResponseV4 {
    /// Gets the websocket URL for a specific voice engine.
    pub fn url_for_engine(&self, engine: &str) -> Option<&str> {
        self.websocket_urls.get(engine).map(|s| s.as_str())
    }

    /// Returns all engines the response carries a URL for.
    pub fn engines(&self) -> impl Iterator<Item = &str> {
        self.websocket_urls.keys().map(|s| s.as_str())
    }
}

/// Websocket auth response of either revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WsAuthResponse {
    Single(WsAuthResponseV3),
    PerModel(WsAuthResponseV4),
}

impl WsAuthResponse {
    /// Parses a response body according to the schema of `version`.
    pub fn parse(version: ApiVersion, body: &[u8]) -> serde_json::Result<Self> {
        match version {
            ApiVersion::V3 => serde_json::from_slice(body).map(Self::Single),
            ApiVersion::V4 => serde_json::from_slice(body).map(Self::PerModel),
        }
    }

    /// Websocket URL the browser should use for `model`.
    ///
    /// A single-URL response serves every model.
    pub fn websocket_url_for(&self, model: PlayHtModel) -> Option<&str> {
        match self {
            Self::Single(r) => Some(r.websocket_url.as_str()),
            Self::PerModel(r) => r.url_for_engine(model.as_str()),
        }
    }

    pub fn expires_at(&self) -> &str {
        match self {
            Self::Single(r) => &r.expires_at,
            Self::PerModel(r) => &r.expires_at,
        }
    }
}

impl fmt::Display for WsAuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}

// =============================================================================
// Error Responses
// =============================================================================

/// Play.ht API error body.
///
/// Play.ht is not consistent about field names across endpoints, so every
/// field is optional and the common aliases are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayHtApiError {
    /// Error message
    #[serde(alias = "error_message")]
    pub message: Option<String>,

    /// Error code
    #[serde(alias = "error_code", alias = "error_id")]
    pub code: Option<String>,
}

impl PlayHtApiError {
    /// Parses an error body, returning `None` unless it carries a message or code.
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Self>(body)
            .ok()
            .filter(|e| e.message.is_some() || e.code.is_some())
    }
}

impl fmt::Display for PlayHtApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.code) {
            (Some(msg), Some(code)) => write!(f, "{msg} ({code})"),
            (Some(msg), None) => f.write_str(msg),
            (None, Some(code)) => write!(f, "Error code: {code}"),
            (None, None) => f.write_str("Unknown Play.ht API error"),
        }
    }
}

impl std::error::Error for PlayHtApiError {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const V4_BODY: &str = r#"{
        "websocket_urls": {
            "Play3.0-mini": "wss://example.com/ws/play3",
            "PlayDialog": "wss://example.com/ws/dialog"
        },
        "expires_at": "2024-01-01T00:00:00Z"
    }"#;

    #[test]
    fn test_ws_auth_response_v4() {
        let response = WsAuthResponse::parse(ApiVersion::V4, V4_BODY.as_bytes()).unwrap();

        assert_eq!(
            response.websocket_url_for(PlayHtModel::Play30Mini),
            Some("wss://example.com/ws/play3")
        );
        assert_eq!(
            response.websocket_url_for(PlayHtModel::PlayDialog),
            Some("wss://example.com/ws/dialog")
        );
        assert!(
            response
                .websocket_url_for(PlayHtModel::PlayDialogArabic)
                .is_none()
        );
        assert_eq!(response.expires_at(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_ws_auth_response_v4_engines() {
        let response: WsAuthResponseV4 = serde_json::from_str(V4_BODY).unwrap();
        let engines: Vec<&str> = response.engines().collect();

        assert_eq!(engines, vec!["Play3.0-mini", "PlayDialog"]);
    }

    #[test]
    fn test_ws_auth_response_v3_serves_every_model() {
        let json = r#"{"websocket_url": "wss://example.com/ws", "expires_at": "soon"}"#;
        let response = WsAuthResponse::parse(ApiVersion::V3, json.as_bytes()).unwrap();

        for model in PlayHtModel::all() {
            assert_eq!(
                response.websocket_url_for(*model),
                Some("wss://example.com/ws")
            );
        }
        assert_eq!(response.expires_at(), "soon");
    }

    #[test]
    fn test_ws_auth_response_schema_mismatch() {
        // A v3 body does not satisfy the v4 schema and vice versa
        let v3 = r#"{"websocket_url": "wss://example.com/ws", "expires_at": "soon"}"#;
        assert!(WsAuthResponse::parse(ApiVersion::V4, v3.as_bytes()).is_err());
        assert!(WsAuthResponse::parse(ApiVersion::V3, V4_BODY.as_bytes()).is_err());
        assert!(WsAuthResponse::parse(ApiVersion::V4, b"not json").is_err());
    }

    #[test]
    fn test_ws_auth_response_display_is_json() {
        let response = WsAuthResponse::parse(ApiVersion::V4, V4_BODY.as_bytes()).unwrap();
        let rendered = response.to_string();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["websocket_urls"]["PlayDialog"], "wss://example.com/ws/dialog");
        assert_eq!(value["expires_at"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_ws_auth_response_keeps_unknown_fields() {
        let json = r#"{
            "websocket_urls": {"PlayDialog": "wss://example.com/ws/dialog"},
            "expires_at": "2024-01-01T00:00:00Z",
            "region": "us-east",
            "limits": {"concurrent": 2}
        }"#;
        let response = WsAuthResponse::parse(ApiVersion::V4, json.as_bytes()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response.to_string()).unwrap();
        let raw: serde_json::Value = serde_json::from_str(json).unwrap();

        assert_eq!(value, raw);
    }

    #[test]
    fn test_api_error_parse() {
        let err = PlayHtApiError::parse(
            br#"{"error_message": "Invalid credentials", "error_id": "UNAUTHORIZED"}"#,
        )
        .unwrap();
        assert_eq!(err.to_string(), "Invalid credentials (UNAUTHORIZED)");

        assert!(PlayHtApiError::parse(b"{}").is_none());
        assert!(PlayHtApiError::parse(b"<html>").is_none());
    }
}
