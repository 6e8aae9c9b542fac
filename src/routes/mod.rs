pub mod users;
pub mod weather;

use axum::{response::IntoResponse, routing::get, Json, Router};
use dashmap::DashMap;
use http::StatusCode;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use std::{error::Error, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    storage::weather_cache::WeatherCache,
    utils::{config::Config, openweather::OpenWeatherClient, state::AppState},
};

pub async fn make_app() -> Result<Router, Box<dyn Error>> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target("weather_backend", level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();

    info!("Initializing application...");
    let config = Config::init();
    info!("Configuration loaded successfully");

    // The pool connects on first use, so an unreachable database reaches the
    // storage layer as an error instead of aborting startup. The weather
    // endpoints then degrade to live fetches.
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .idle_timeout(Some(std::time::Duration::from_secs(60)))
        .connect_lazy(&config.database_url)?;
    info!("Database connection pool created successfully");

    let provider = OpenWeatherClient::new(config.openweather_api_key.clone());
    info!("External clients initialized successfully");

    let state = Arc::new(AppState {
        weather_cache: WeatherCache::new(db_pool.clone()),
        db_pool,
        provider,
        geocode_cache: DashMap::new(),
        config,
    });

    Ok(build_router(state))
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = weather::weather_routes().nest("/users", users::user_routes());

    Router::new()
        .route("/", get(health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "ok"}))).into_response()
}
