use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// In-memory cache slot with a TTL, used for geocoding results.
#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    pub value: T,
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, ttl_seconds: i64) -> Self {
        Self {
            value,
            expires_at: Utc::now() + Duration::seconds(ttl_seconds),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// One persisted weather snapshot row. Rows are append-only: refreshing a
/// coordinate pair inserts a new row rather than updating an old one, and
/// stale rows stay in place until the retention purge removes them.
#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct CachedWeather {
    pub id: i32,
    pub lat: f64,
    pub lon: f64,
    /// JSON-serialized `WeatherData`.
    pub data: String,
    pub cached_at: DateTime<Utc>,
}

impl CachedWeather {
    /// Whether the row may still be served instead of a live fetch. An entry
    /// exactly at the window boundary is still fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now - self.cached_at <= window
    }
}
