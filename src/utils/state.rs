use dashmap::DashMap;
use sqlx::PgPool;

use crate::models::cache::CacheEntry;
use crate::models::weather::Location;
use crate::storage::weather_cache::WeatherCache;
use crate::utils::config::Config;
use crate::utils::openweather::OpenWeatherClient;

pub struct AppState {
    pub config: Config,
    pub db_pool: PgPool,
    pub provider: OpenWeatherClient,
    pub weather_cache: WeatherCache,
    /// Geocoding results keyed by lowercased city name.
    pub geocode_cache: DashMap<String, CacheEntry<Location>>,
}
