//! OpenWeatherMap client.
//!
//! Owns the HTTP client and the API key; handlers never read credentials
//! from the environment themselves. Every endpoint wrapper distinguishes a
//! missing key, an upstream error status, a network failure and an
//! undecodable payload so callers can map each to its own response.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::openweather::{
    AirPollutionResponse, ApiErrorBody, CurrentWeatherResponse, ForecastResponse, ForecastSlot,
    GeoResult, UvResponse,
};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("OpenWeatherMap API key is not configured")]
    MissingApiKey,
    #[error("upstream returned status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different host. Tests use this to stand a mock
    /// server in for api.openweathermap.org.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn key(&self) -> Result<String, ProviderError> {
        self.api_key.clone().ok_or(ProviderError::MissingApiKey)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("fetching {url}");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let parsed: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message: parsed
                    .message
                    .unwrap_or_else(|| "Failed to fetch weather data".to_string()),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn current_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentWeatherResponse, ProviderError> {
        let key = self.key()?;
        self.get_json(
            "/data/2.5/weather",
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", key),
                ("units", "imperial".to_string()),
            ],
        )
        .await
    }

    pub async fn uv_index(&self, lat: f64, lon: f64) -> Result<f64, ProviderError> {
        let key = self.key()?;
        let response: UvResponse = self
            .get_json(
                "/data/2.5/uvi",
                &[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("appid", key),
                ],
            )
            .await?;
        Ok(response.value)
    }

    /// Current air quality on the US EPA scale. The provider reports a 1-5
    /// index, which the US scale approximates as `index * 50`.
    pub async fn air_quality(&self, lat: f64, lon: f64) -> Result<f64, ProviderError> {
        let key = self.key()?;
        let response: AirPollutionResponse = self
            .get_json(
                "/data/2.5/air_pollution",
                &[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("appid", key),
                ],
            )
            .await?;
        Ok(response
            .list
            .first()
            .map(|slot| slot.main.aqi * 50.0)
            .unwrap_or(0.0))
    }

    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<Vec<ForecastSlot>, ProviderError> {
        let key = self.key()?;
        let response: ForecastResponse = self
            .get_json(
                "/data/2.5/forecast",
                &[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("appid", key),
                    ("units", "imperial".to_string()),
                ],
            )
            .await?;
        Ok(response.list)
    }

    pub async fn geocode(&self, city: &str) -> Result<Vec<GeoResult>, ProviderError> {
        let key = self.key()?;
        self.get_json(
            "/geo/1.0/direct",
            &[
                ("q", city.to_string()),
                ("limit", "1".to_string()),
                ("appid", key),
            ],
        )
        .await
    }
}
