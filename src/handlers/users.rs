use std::sync::Arc;

use crate::{
    models::{
        error::Error,
        user::{NewLocation, NewUser},
    },
    storage::users::{LocationRepository, UserRepository},
    utils::state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewUser>,
) -> Result<impl IntoResponse, Error> {
    if payload.username.trim().is_empty() {
        return Err(Error::validation("Username is required"));
    }
    let user = UserRepository::create(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserRepository::find_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| Error::not_found("User not found"))?;
    Ok((StatusCode::OK, Json(user)))
}

pub async fn list_locations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, user_id).await?;
    let locations = LocationRepository::list_for_user(&state.db_pool, user_id).await?;
    Ok((StatusCode::OK, Json(locations)))
}

pub async fn add_location(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
    Json(payload): Json<NewLocation>,
) -> Result<impl IntoResponse, Error> {
    if payload.name.trim().is_empty() {
        return Err(Error::validation("Location name is required"));
    }
    require_user(&state, user_id).await?;
    let location = LocationRepository::create(&state.db_pool, user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

pub async fn update_location(
    State(state): State<Arc<AppState>>,
    Path((user_id, location_id)): Path<(i32, i32)>,
    Json(payload): Json<NewLocation>,
) -> Result<impl IntoResponse, Error> {
    if payload.name.trim().is_empty() {
        return Err(Error::validation("Location name is required"));
    }
    let updated = LocationRepository::update(&state.db_pool, user_id, location_id, &payload)
        .await?
        .ok_or_else(|| Error::not_found("Location not found"))?;
    Ok((StatusCode::OK, Json(updated)))
}

pub async fn delete_location(
    State(state): State<Arc<AppState>>,
    Path((user_id, location_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let removed = LocationRepository::delete(&state.db_pool, user_id, location_id).await?;
    if !removed {
        return Err(Error::not_found("Location not found"));
    }
    Ok((StatusCode::OK, Json(json!({ "message": "Location deleted" }))))
}

async fn require_user(state: &AppState, user_id: i32) -> Result<(), Error> {
    UserRepository::find_by_id(&state.db_pool, user_id)
        .await?
        .ok_or_else(|| Error::not_found("User not found"))?;
    Ok(())
}
