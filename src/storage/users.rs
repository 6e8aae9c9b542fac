//! User and saved-location repositories.

use sqlx::PgPool;

use crate::models::user::{NewLocation, NewUser, SavedLocation, User};

pub struct UserRepository;

impl UserRepository {
    pub async fn create(pool: &PgPool, new_user: &NewUser) -> Result<User, sqlx::Error> {
        sqlx::query_as("INSERT INTO users (username) VALUES ($1) RETURNING id, username, created_at")
            .bind(&new_user.username)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT id, username, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

pub struct LocationRepository;

impl LocationRepository {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: i32,
    ) -> Result<Vec<SavedLocation>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, user_id, name, lat, lon, country, is_default FROM locations \
             WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Inserts a location. Setting `is_default` clears the flag on the
    /// user's other locations in the same transaction, so at most one
    /// default survives per user.
    pub async fn create(
        pool: &PgPool,
        user_id: i32,
        location: &NewLocation,
    ) -> Result<SavedLocation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if location.is_default {
            sqlx::query("UPDATE locations SET is_default = false WHERE user_id = $1")
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        let created: SavedLocation = sqlx::query_as(
            "INSERT INTO locations (user_id, name, lat, lon, country, is_default) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, user_id, name, lat, lon, country, is_default",
        )
        .bind(user_id)
        .bind(&location.name)
        .bind(location.lat)
        .bind(location.lon)
        .bind(&location.country)
        .bind(location.is_default)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Returns `None` when the location does not exist for that user.
    pub async fn update(
        pool: &PgPool,
        user_id: i32,
        location_id: i32,
        location: &NewLocation,
    ) -> Result<Option<SavedLocation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if location.is_default {
            sqlx::query("UPDATE locations SET is_default = false WHERE user_id = $1 AND id <> $2")
                .bind(user_id)
                .bind(location_id)
                .execute(&mut *tx)
                .await?;
        }

        let updated: Option<SavedLocation> = sqlx::query_as(
            "UPDATE locations SET name = $3, lat = $4, lon = $5, country = $6, is_default = $7 \
             WHERE user_id = $1 AND id = $2 \
             RETURNING id, user_id, name, lat, lon, country, is_default",
        )
        .bind(user_id)
        .bind(location_id)
        .bind(&location.name)
        .bind(location.lat)
        .bind(location.lon)
        .bind(&location.country)
        .bind(location.is_default)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }

    pub async fn delete(
        pool: &PgPool,
        user_id: i32,
        location_id: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(location_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
