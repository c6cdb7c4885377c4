//! Live TV channel entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A live TV channel carrying an HLS stream.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Unique channel identifier.
    pub id: Uuid,
    /// Channel name.
    pub name: String,
    /// Logo image URL.
    pub cover_url: String,
    /// HLS playlist URL.
    pub m3u8_url: String,
    /// When the channel was created.
    pub created_at: DateTime<Utc>,
    /// When the channel was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInput {
    /// Channel name (required).
    pub name: String,
    /// Logo image URL.
    pub cover_url: String,
    /// HLS playlist URL (required).
    pub m3u8_url: String,
}
