//! Season entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::episode::Episode;

/// A season within a series. `number` is unique within the owning series.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    /// Unique season identifier.
    pub id: Uuid,
    /// Owning series.
    pub series_id: Uuid,
    /// Season number, unique within the series.
    pub number: i32,
    /// Title.
    pub title: String,
    /// Air year.
    pub year: i32,
    /// Optional description.
    pub description: Option<String>,
    /// Optional cover image URL.
    pub cover_url: Option<String>,
    /// Derived: number of episodes in this season.
    pub total_episodes: i32,
    /// When the season was created.
    pub created_at: DateTime<Utc>,
    /// When the season was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonInput {
    /// Owning series (required on create, ignored on update).
    pub series_id: Option<Uuid>,
    /// Season number.
    pub number: i32,
    /// Title (required).
    pub title: String,
    /// Air year.
    pub year: i32,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional cover image URL.
    #[serde(default)]
    pub cover_url: Option<String>,
}

/// A season with its episodes, ordered by episode number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonWithEpisodes {
    /// The season row.
    #[serde(flatten)]
    pub season: Season,
    /// Episodes ordered by number.
    pub episodes: Vec<Episode>,
}
