use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::users::{
    add_location, create_user, delete_location, get_user, list_locations, update_location,
};
use crate::utils::state::AppState;

pub fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_user))
        .route("/{id}", get(get_user))
        .route(
            "/{user_id}/locations",
            get(list_locations).post(add_location),
        )
        .route(
            "/{user_id}/locations/{location_id}",
            put(update_location).delete(delete_location),
        )
}
