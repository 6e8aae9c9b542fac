use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
}

/// A city a user has saved. At most one location per user carries
/// `is_default`; the repository clears competing flags on write.
#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct SavedLocation {
    pub id: i32,
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: Option<String>,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, rename = "isDefault")]
    pub is_default: bool,
}
