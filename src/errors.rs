//! Request-path errors and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::core::playht::{PlayHtError, PlayHtModel, WsAuthResponse};

/// Body returned for every server-side failure. Details stay in the logs.
pub const GENERIC_ERROR_BODY: &str =
    "Error while obtaining authenticated websocket URL. Please check the server logs.";

/// Errors raised while serving the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The provider refused the credentials or returned something unusable.
    #[error(transparent)]
    Auth(#[from] PlayHtError),

    /// The provider answered but has no URL for the configured model.
    #[error("Model '{model}' not found in websocket auth response: {response}")]
    ModelNotFound {
        model: PlayHtModel,
        response: WsAuthResponse,
    },

    #[error("failed to load page template {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ModelNotFound { .. } => StatusCode::BAD_REQUEST,
            Self::Auth(_) | Self::Template { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::ModelNotFound { .. } => (status, self.to_string()).into_response(),
            other => {
                error!(error = %other, "Error serving HTML page");
                (status, GENERIC_ERROR_BODY).into_response()
            }
        }
    }
}
