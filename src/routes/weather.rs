use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::{cache::clear_cache, location::get_location, weather::get_weather};
use crate::utils::state::AppState;

pub fn weather_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/location", get(get_location))
        .route("/cache/clear", delete(clear_cache))
}
