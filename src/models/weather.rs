use serde::{Deserialize, Serialize};

/// Normalized current conditions, independent of the upstream provider's
/// payload shape. Temperatures are Fahrenheit, speeds mph, distances miles;
/// pressure is the inHg display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location: String,
    pub temperature: i32,
    #[serde(rename = "feelsLike")]
    pub feels_like: i32,
    pub description: String,
    pub humidity: i32,
    pub pressure: String,
    pub visibility: i32,
    #[serde(rename = "windSpeed")]
    pub wind_speed: i32,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "uvIndex")]
    pub uv_index: i32,
    #[serde(rename = "uvLevel")]
    pub uv_level: String,
    pub aqi: i32,
    #[serde(rename = "aqiLevel")]
    pub aqi_level: String,
    pub icon: String,
    pub sunrise: String,
    pub sunset: String,
    #[serde(rename = "isDay")]
    pub is_day: bool,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    #[serde(rename = "dayName")]
    pub day_name: String,
    pub icon: String,
    pub description: String,
    #[serde(rename = "tempHigh")]
    pub temp_high: i32,
    #[serde(rename = "tempLow")]
    pub temp_low: i32,
    #[serde(rename = "precipitationChance")]
    pub precipitation_chance: i32,
}

/// The canonical snapshot served to clients and stored in the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub city: String,
    pub country: Option<String>,
}
