//! Series entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::season::SeasonWithEpisodes;

/// The root of the Series → Season → Episode hierarchy.
///
/// `seasons` and `episodes` are denormalized counters kept in sync by the
/// catalog service after every membership-changing mutation; they are
/// never incremented in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Unique series identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Synopsis text.
    pub synopsis: String,
    /// Genre label.
    pub genre: String,
    /// First-air year.
    pub year: i32,
    /// Derived: number of seasons.
    pub seasons: i32,
    /// Derived: total episodes across all seasons.
    pub episodes: i32,
    /// Rating on a 0-10 scale.
    pub ranking: f64,
    /// Poster image URL.
    pub cover_url: String,
    /// Trailer or fallback playback URL.
    pub video_url: String,
    /// Whether the series is surfaced on the recommended rail.
    pub is_recommended: bool,
    /// When the series was created.
    pub created_at: DateTime<Utc>,
    /// When the series was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a series.
///
/// The counter fields are intentionally absent: they are owned by the
/// counter maintenance logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInput {
    /// Title (required).
    pub title: String,
    /// Synopsis.
    pub synopsis: String,
    /// Genre.
    pub genre: String,
    /// First-air year.
    pub year: i32,
    /// Rating.
    #[serde(default)]
    pub ranking: f64,
    /// Poster image URL.
    pub cover_url: String,
    /// Trailer URL.
    pub video_url: String,
    /// Recommended flag.
    #[serde(default)]
    pub is_recommended: bool,
}

/// A series together with its full season/episode tree, as returned by
/// the detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesWithSeasons {
    /// The series row.
    #[serde(flatten)]
    pub series: Series,
    /// Seasons ordered by number, each with its episodes.
    pub seasons_list: Vec<SeasonWithEpisodes>,
}
