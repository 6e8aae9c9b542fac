#[derive(Debug, Clone)]
pub struct Config {
    /// A missing key is not a startup failure; the weather and location
    /// endpoints answer 500 until one is provided.
    pub openweather_api_key: Option<String>,
    pub database_url: String,
}

impl Config {
    pub fn init() -> Self {
        let openweather_api_key = std::env::var("OPENWEATHER_API_KEY")
            .or_else(|_| std::env::var("OPENWEATHERMAP_API_KEY"))
            .ok();
        if openweather_api_key.is_none() {
            tracing::warn!(
                "No OpenWeatherMap API key found. Set OPENWEATHER_API_KEY or OPENWEATHERMAP_API_KEY environment variable."
            );
        }

        Config {
            openweather_api_key,
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL not set"),
        }
    }
}
