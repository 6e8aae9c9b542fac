use std::sync::Arc;

use crate::models::cache::CacheEntry;
use crate::models::error::Error;
use crate::models::weather::Location;
use crate::utils::openweather::ProviderError;
use crate::utils::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use tracing::warn;

use serde::Deserialize;

/// Geocoding results barely change; memoize them for an hour.
const GEOCODE_TTL_SECS: i64 = 60 * 60;

#[derive(Deserialize)]
pub struct LocationQuery {
    city: Option<String>,
}

pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocationQuery>,
) -> Result<impl IntoResponse, Error> {
    let city = params
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| Error::validation("City name is required"))?;

    let cache_key = city.to_lowercase();
    if let Some(cached) = state.geocode_cache.get(&cache_key) {
        if !cached.is_expired() {
            return Ok((StatusCode::OK, Json(cached.value.clone())));
        }
    }

    let results = state.provider.geocode(city).await.map_err(location_error)?;
    let Some(hit) = results.first() else {
        return Err(Error::not_found("City not found"));
    };

    let location = Location {
        lat: hit.lat,
        lon: hit.lon,
        city: hit.name.clone(),
        country: hit.country.clone(),
    };
    state
        .geocode_cache
        .insert(cache_key, CacheEntry::new(location.clone(), GEOCODE_TTL_SECS));

    Ok((StatusCode::OK, Json(location)))
}

fn location_error(e: ProviderError) -> Error {
    match e {
        ProviderError::MissingApiKey => {
            Error::configuration("OpenWeatherMap API key not configured")
        }
        ProviderError::Upstream { status, message } => {
            warn!("geocoding upstream returned {status}: {message}");
            Error::upstream(status, "Failed to fetch location data")
        }
        ProviderError::Network(e) => {
            warn!("geocoding upstream unreachable: {e}");
            Error::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch location data",
            )
        }
        ProviderError::Decode(e) => {
            warn!("geocoding upstream sent an unreadable payload: {e}");
            Error::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch location data",
            )
        }
    }
}
