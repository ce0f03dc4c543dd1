//! Router configuration
//!
//! The server has a single page: every method and every path is answered by
//! [`serve_page`](crate::handlers::serve_page).

use std::sync::Arc;

use axum::Router;
use http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::serve_page;
use crate::state::AppState;

/// Create the application router with state applied.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(serve_page)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}
