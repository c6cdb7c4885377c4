//! Movie entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A standalone film in the catalog. No derived counters.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique movie identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Synopsis text.
    pub synopsis: String,
    /// Genre label.
    pub genre: String,
    /// Release year.
    pub year: i32,
    /// Runtime in minutes.
    pub duration: i32,
    /// Rating on a 0-10 scale.
    pub ranking: f64,
    /// Poster image URL.
    pub cover_url: String,
    /// Playback URL.
    pub video_url: String,
    /// Whether the movie is surfaced on the recommended rail.
    pub is_recommended: bool,
    /// When the movie was created.
    pub created_at: DateTime<Utc>,
    /// When the movie was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    /// Title (required).
    pub title: String,
    /// Synopsis.
    pub synopsis: String,
    /// Genre.
    pub genre: String,
    /// Release year.
    pub year: i32,
    /// Runtime in minutes.
    pub duration: i32,
    /// Rating.
    #[serde(default)]
    pub ranking: f64,
    /// Poster image URL.
    pub cover_url: String,
    /// Playback URL.
    pub video_url: String,
    /// Recommended flag.
    #[serde(default)]
    pub is_recommended: bool,
}
