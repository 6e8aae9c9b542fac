use std::sync::Arc;

use crate::models::error::Error;
use crate::utils::normalize::build_weather_data;
use crate::utils::openweather::ProviderError;
use crate::utils::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use http::StatusCode;
use tracing::warn;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct WeatherQuery {
    lat: Option<String>,
    lon: Option<String>,
}

/// Weather for a coordinate pair: cache first, then one live fetch.
/// A broken cache never fails the request; it only costs the shortcut.
pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeatherQuery>,
) -> Result<impl IntoResponse, Error> {
    let (lat, lon) = parse_coordinates(&params)?;

    match state.weather_cache.lookup(lat, lon).await {
        Ok(Some(snapshot)) => return Ok((StatusCode::OK, Json(snapshot))),
        Ok(None) => {}
        Err(e) => warn!("weather cache lookup failed, fetching live: {e}"),
    }

    let current = state
        .provider
        .current_weather(lat, lon)
        .await
        .map_err(weather_error)?;

    // Secondary feeds degrade to defaults; only current conditions are fatal.
    let uv_index = state.provider.uv_index(lat, lon).await.unwrap_or_else(|e| {
        warn!("UV index fetch failed, defaulting to 0: {e}");
        0.0
    });
    let aqi = state
        .provider
        .air_quality(lat, lon)
        .await
        .unwrap_or_else(|e| {
            warn!("air quality fetch failed, defaulting to 0: {e}");
            0.0
        });
    let slots = state.provider.forecast(lat, lon).await.unwrap_or_else(|e| {
        warn!("forecast fetch failed, returning empty forecast: {e}");
        Vec::new()
    });

    let snapshot = build_weather_data(&current, uv_index, aqi, &slots, Utc::now());

    if let Err(e) = state.weather_cache.store(lat, lon, &snapshot).await {
        warn!("failed to cache weather snapshot: {e}");
    }

    Ok((StatusCode::OK, Json(snapshot)))
}

fn parse_coordinates(params: &WeatherQuery) -> Result<(f64, f64), Error> {
    let lat = params.lat.as_deref().and_then(|v| v.parse::<f64>().ok());
    let lon = params.lon.as_deref().and_then(|v| v.parse::<f64>().ok());
    match (lat, lon) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Ok((lat, lon)),
        _ => Err(Error::validation("Latitude and longitude are required")),
    }
}

fn weather_error(e: ProviderError) -> Error {
    match e {
        ProviderError::MissingApiKey => Error::configuration(
            "OpenWeatherMap API key not configured. Please set OPENWEATHER_API_KEY environment variable.",
        ),
        ProviderError::Upstream { status, message } => {
            warn!("weather upstream returned {status}: {message}");
            Error::upstream(status, &format!("Weather API error: {message}"))
        }
        ProviderError::Network(e) => {
            warn!("weather upstream unreachable: {e}");
            Error::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch weather data. Please check your internet connection and try again.",
            )
        }
        ProviderError::Decode(e) => {
            warn!("weather upstream sent an unreadable payload: {e}");
            Error::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch weather data. Please check your internet connection and try again.",
            )
        }
    }
}
