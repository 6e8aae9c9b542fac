//! Raw OpenWeatherMap payload types.
//!
//! Secondary fields default when absent so a sparse upstream response still
//! deserializes; only the current-conditions `main` block is required.

use serde::Deserialize;

/// Response from `/data/2.5/weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sys: SysInfo,
    pub main: MainMeasurements,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Shift from UTC in seconds for the requested location.
    #[serde(default)]
    pub timezone: i32,
    #[serde(default)]
    pub dt: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysInfo {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainMeasurements {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: i32,
    pub pressure: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Response from `/data/2.5/forecast` (3-hourly slots, ~5 days).
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSlot {
    pub dt: i64,
    #[serde(default)]
    pub main: SlotMeasurements,
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Precipitation probability, 0.0 - 1.0.
    #[serde(default)]
    pub pop: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotMeasurements {
    #[serde(default)]
    pub temp_max: f64,
    #[serde(default)]
    pub temp_min: f64,
}

/// Response from `/data/2.5/uvi`.
#[derive(Debug, Clone, Deserialize)]
pub struct UvResponse {
    #[serde(default)]
    pub value: f64,
}

/// Response from `/data/2.5/air_pollution`.
#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionResponse {
    #[serde(default)]
    pub list: Vec<AirPollutionSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionSlot {
    pub main: AirQualityIndex,
}

/// The provider reports air quality as a 1-5 index.
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityIndex {
    pub aqi: f64,
}

/// One match from `/geo/1.0/direct`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoResult {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: Option<String>,
}

/// Error body the provider sends on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
