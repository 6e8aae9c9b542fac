//! Coordinate-keyed store of normalized weather snapshots.
//!
//! Entries are matched on the exact (lat, lon) pair. Freshness and
//! retention are separate windows: `lookup` serves nothing older than the
//! freshness window but leaves stale rows in place, and `purge_older_than`
//! removes rows past the retention window regardless of freshness.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::warn;

use crate::models::cache::CachedWeather;
use crate::models::weather::WeatherData;

/// Age at which a cached snapshot stops being served.
pub const FRESHNESS_WINDOW_SECS: i64 = 10 * 60;
/// Age at which a cached snapshot becomes eligible for the purge.
pub const RETENTION_WINDOW_SECS: i64 = 60 * 60;

#[derive(Clone)]
pub struct WeatherCache {
    pool: PgPool,
}

impl WeatherCache {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The newest snapshot for the exact coordinate pair, if it is still
    /// fresh. An unreadable payload counts as a miss.
    pub async fn lookup(&self, lat: f64, lon: f64) -> Result<Option<WeatherData>, sqlx::Error> {
        let row: Option<CachedWeather> = sqlx::query_as(
            "SELECT id, lat, lon, data, cached_at FROM weather_cache \
             WHERE lat = $1 AND lon = $2 ORDER BY cached_at DESC LIMIT 1",
        )
        .bind(lat)
        .bind(lon)
        .fetch_optional(&self.pool)
        .await?;

        let Some(entry) = row else {
            return Ok(None);
        };
        if !entry.is_fresh(Utc::now(), Duration::seconds(FRESHNESS_WINDOW_SECS)) {
            return Ok(None);
        }

        match serde_json::from_str(&entry.data) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                warn!("discarding unreadable cache entry {}: {e}", entry.id);
                Ok(None)
            }
        }
    }

    /// Append-only insert; prior entries for the same coordinates are kept
    /// until the purge removes them.
    pub async fn store(
        &self,
        lat: f64,
        lon: f64,
        snapshot: &WeatherData,
    ) -> Result<CachedWeather, sqlx::Error> {
        let data = serde_json::to_string(snapshot)
            .map_err(|e| sqlx::Error::Protocol(format!("Failed to serialize snapshot: {e}")))?;

        sqlx::query_as(
            "INSERT INTO weather_cache (lat, lon, data, cached_at) VALUES ($1, $2, $3, $4) \
             RETURNING id, lat, lon, data, cached_at",
        )
        .bind(lat)
        .bind(lon)
        .bind(data)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    /// Deletes every entry older than `window_secs`, returning how many rows
    /// were removed.
    pub async fn purge_older_than(&self, window_secs: i64) -> Result<u64, sqlx::Error> {
        let cutoff = Utc::now() - Duration::seconds(window_secs);
        let result = sqlx::query("DELETE FROM weather_cache WHERE cached_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
