pub mod users;
pub mod weather_cache;

pub use weather_cache::WeatherCache;
