use crate::error::{AppError, AppResult};
use crate::models::{ShortenRequest, ShortenResponse};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Redirect};
use std::sync::Arc;
use validator::Validate;

use super::AppState;

/// Create a short URL
pub async fn create_short_url(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ShortenRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::SyntaxInvalid(e.to_string()))?;

    let original_url = match payload.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::EmptyInput),
    };

    // Syntax first, then a single DNS lookup; nothing reaches the store
    // unvalidated.
    state.validator.validate(&original_url).await?;

    let short_url = state.store.insert_or_find(&original_url);
    tracing::info!(%original_url, short_url, "stored short URL");

    Ok(Json(ShortenResponse {
        original_url,
        short_url,
    }))
}

/// Resolve a short URL and redirect
pub async fn resolve_short_url(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> AppResult<Redirect> {
    let target = state.store.resolve(&token)?;
    Ok(Redirect::temporary(&target))
}
