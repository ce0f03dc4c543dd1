use std::sync::Arc;

use axum::{extract::State, response::Html};
use tracing::debug;

use crate::core::template::{PageTemplate, SELECTED_MODEL_TOKEN, WEBSOCKET_URL_TOKEN};
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Serves the streaming page.
///
/// Every call requests a fresh websocket URL from the provider, reloads the
/// template from disk and substitutes the URL and model into it.
///
/// # Responses
/// * `200` - rendered HTML
/// * `400` - the provider returned no URL for the configured model
/// * `500` - provider or template failure (details in the server logs only)
pub async fn serve_page(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let config = &state.config;

    let grant = state.auth.authenticate().await?;
    debug!(expires_at = grant.expires_at(), model = %config.model, "Obtained websocket URL");

    let Some(websocket_url) = grant.websocket_url_for(config.model).map(str::to_owned) else {
        return Err(AppError::ModelNotFound {
            model: config.model,
            response: grant,
        });
    };

    let template = PageTemplate::load(&config.template_path)
        .await
        .map_err(|source| AppError::Template {
            path: config.template_path.display().to_string(),
            source,
        })?;

    let page = template.render(&[
        (WEBSOCKET_URL_TOKEN, websocket_url.as_str()),
        (SELECTED_MODEL_TOKEN, config.model.as_str()),
    ]);

    Ok(Html(page))
}
