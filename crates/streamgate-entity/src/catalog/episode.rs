//! Episode entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An episode within a season. `number` is unique within the owning season.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Unique episode identifier.
    pub id: Uuid,
    /// Owning season.
    pub season_id: Uuid,
    /// Episode number, unique within the season.
    pub number: i32,
    /// Title.
    pub title: String,
    /// Optional synopsis.
    pub synopsis: Option<String>,
    /// Runtime in minutes.
    pub duration: i32,
    /// Playback URL.
    pub video_url: String,
    /// Optional thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// Optional original air date.
    pub air_date: Option<DateTime<Utc>>,
    /// When the episode was created.
    pub created_at: DateTime<Utc>,
    /// When the episode was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating an episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeInput {
    /// Owning season (required on create, ignored on update).
    pub season_id: Option<Uuid>,
    /// Episode number.
    pub number: i32,
    /// Title (required).
    pub title: String,
    /// Optional synopsis.
    #[serde(default)]
    pub synopsis: Option<String>,
    /// Runtime in minutes.
    pub duration: i32,
    /// Playback URL.
    pub video_url: String,
    /// Optional thumbnail URL.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Optional air date.
    #[serde(default)]
    pub air_date: Option<DateTime<Utc>>,
}
