//! Outbound websocket-auth client.
//!
//! # Request Format
//!
//! **URL**: `https://api.play.ht/api/v{3,4}/websocket-auth`
//! **Method**: POST, no body
//!
//! | Header | Value |
//! |--------|-------|
//! | Authorization | Bearer {api_key} |
//! | X-User-Id | {user_id} |
//! | Content-Type | application/json |
//!
//! Each call authenticates from scratch. No timeout beyond the reqwest
//! defaults is applied, and failures are never retried.

use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::{debug, error};
use zeroize::Zeroizing;

use super::USER_ID_HEADER;
use super::config::ApiVersion;
use super::messages::{PlayHtApiError, WsAuthResponse};

/// Errors raised while obtaining an authenticated websocket URL.
#[derive(Debug, thiserror::Error)]
pub enum PlayHtError {
    #[error(
        "Failed to get authenticated websocket URL. Please make sure the API_KEY and USER_ID \
         are correct. Received response: {status}{}",
        fmt_detail(.detail)
    )]
    Unauthorized {
        status: StatusCode,
        detail: Option<PlayHtApiError>,
    },

    #[error("websocket auth request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed websocket auth response: {source}; body: {body}")]
    InvalidResponse {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

fn fmt_detail(detail: &Option<PlayHtApiError>) -> String {
    detail
        .as_ref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

/// Source of authenticated websocket URLs.
///
/// The request handler only depends on this seam, so the provider can be
/// swapped or stubbed.
#[async_trait]
pub trait WebSocketAuth: Send + Sync {
    /// Obtain a fresh websocket auth grant.
    async fn authenticate(&self) -> Result<WsAuthResponse, PlayHtError>;
}

/// Play.ht websocket-auth client.
pub struct PlayHtAuthClient {
    http: reqwest::Client,
    auth_url: String,
    version: ApiVersion,
    user_id: String,
    api_key: Zeroizing<String>,
}

impl PlayHtAuthClient {
    /// Creates a client against the public endpoint of `version`.
    pub fn new(
        user_id: impl Into<String>,
        api_key: impl Into<String>,
        version: ApiVersion,
    ) -> Self {
        Self::with_url(user_id, api_key, version, version.default_auth_url())
    }

    /// Creates a client against an explicit endpoint.
    pub fn with_url(
        user_id: impl Into<String>,
        api_key: impl Into<String>,
        version: ApiVersion,
        auth_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_url: auth_url.into(),
            version,
            user_id: user_id.into(),
            api_key: Zeroizing::new(api_key.into()),
        }
    }

    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    fn build_request(&self) -> reqwest::RequestBuilder {
        self.http
            .post(&self.auth_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key.as_str()))
            .header(USER_ID_HEADER, &self.user_id)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn request_grant(&self) -> Result<WsAuthResponse, PlayHtError> {
        debug!(url = %self.auth_url, version = %self.version, "Requesting websocket auth");

        let response = self.build_request().send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(PlayHtError::Unauthorized {
                status,
                detail: PlayHtApiError::parse(&body),
            });
        }

        let grant = WsAuthResponse::parse(self.version, &body).map_err(|source| {
            PlayHtError::InvalidResponse {
                source,
                body: String::from_utf8_lossy(&body).into_owned(),
            }
        })?;

        debug!(expires_at = grant.expires_at(), "Websocket auth granted");
        Ok(grant)
    }
}

#[async_trait]
impl WebSocketAuth for PlayHtAuthClient {
    async fn authenticate(&self) -> Result<WsAuthResponse, PlayHtError> {
        self.request_grant().await.inspect_err(|e| {
            error!(error = %e, "Error while obtaining authenticated websocket URL");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::playht::PlayHtModel;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, version: ApiVersion) -> PlayHtAuthClient {
        PlayHtAuthClient::with_url(
            "test-user",
            "test-key",
            version,
            format!("{}/api/{}/websocket-auth", server.uri(), version),
        )
    }

    #[test]
    fn test_new_uses_public_endpoint() {
        let client = PlayHtAuthClient::new("u", "k", ApiVersion::V3);
        assert_eq!(client.auth_url(), "https://api.play.ht/api/v3/websocket-auth");
        assert_eq!(client.version(), ApiVersion::V3);
    }

    #[test]
    fn test_build_request_headers() {
        let client = PlayHtAuthClient::new("test-user", "test-key", ApiVersion::V4);
        let request = client.build_request().build().unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://api.play.ht/api/v4/websocket-auth"
        );
        let headers = request.headers();
        assert_eq!(headers.get("authorization").unwrap(), "Bearer test-key");
        assert_eq!(headers.get("x-user-id").unwrap(), "test-user");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert!(request.body().is_none());
    }

    #[tokio::test]
    async fn test_authenticate_v4_sends_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v4/websocket-auth"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("x-user-id", "test-user"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "websocket_urls": { "PlayDialog": "wss://ws.example/dialog" },
                "expires_at": "2030-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let grant = client_for(&server, ApiVersion::V4)
            .authenticate()
            .await
            .unwrap();

        assert_eq!(
            grant.websocket_url_for(PlayHtModel::PlayDialog),
            Some("wss://ws.example/dialog")
        );
    }

    #[tokio::test]
    async fn test_authenticate_v3_single_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v3/websocket-auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "websocket_url": "wss://ws.example/any",
                "expires_at": "2030-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;

        let grant = client_for(&server, ApiVersion::V3)
            .authenticate()
            .await
            .unwrap();

        assert_eq!(
            grant.websocket_url_for(PlayHtModel::PlayDialogArabic),
            Some("wss://ws.example/any")
        );
    }

    #[tokio::test]
    async fn test_authenticate_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_string(r#"{"error_message": "Invalid API key"}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, ApiVersion::V4)
            .authenticate()
            .await
            .unwrap_err();

        match &err {
            PlayHtError::Unauthorized { status, detail } => {
                assert_eq!(*status, StatusCode::FORBIDDEN);
                assert_eq!(
                    detail.as_ref().and_then(|d| d.message.as_deref()),
                    Some("Invalid API key")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("API_KEY and USER_ID"));
    }

    #[tokio::test]
    async fn test_authenticate_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server, ApiVersion::V4)
            .authenticate()
            .await
            .unwrap_err();

        assert!(matches!(err, PlayHtError::InvalidResponse { ref body, .. } if body == "not json"));
    }

    #[tokio::test]
    async fn test_authenticate_connection_refused() {
        let client = PlayHtAuthClient::with_url(
            "u",
            "k",
            ApiVersion::V4,
            "http://127.0.0.1:1/api/v4/websocket-auth",
        );

        let err = client.authenticate().await.unwrap_err();
        assert!(matches!(err, PlayHtError::Request(_)));
    }
}
