use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::url_handlers;
use super::AppState;

/// Maximum accepted request body size in bytes.
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Create application router
pub fn create_router(state: Arc<AppState>, allowed_origins: Vec<String>) -> axum::Router {
    // Configure CORS with specific origins
    let cors = if allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<http::HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| s.parse::<http::HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    axum::Router::new()
        .route("/api/hello", get(health::hello))
        .route("/api/shorturl", post(url_handlers::create_short_url))
        .route("/api/shorturl/{token}", get(url_handlers::resolve_short_url))
        .route("/_health", get(health::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
