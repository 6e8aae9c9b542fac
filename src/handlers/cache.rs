use std::sync::Arc;

use crate::models::error::Error;
use crate::storage::weather_cache::RETENTION_WINDOW_SECS;
use crate::utils::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde_json::json;

/// Administrative purge of cache entries past the retention window.
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    let removed = state
        .weather_cache
        .purge_older_than(RETENTION_WINDOW_SECS)
        .await
        .map_err(|e| {
            tracing::error!("cache purge failed: {e}");
            Error::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to clear cache")
        })?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": format!("Removed {removed} expired cache entries") })),
    ))
}
