use crate::models::GreetingResponse;
use crate::routes::types::HealthCheckResponse;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use super::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        urls_stored: state.store.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Greeting endpoint
pub async fn hello() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        greeting: "hello API".to_string(),
    })
}
