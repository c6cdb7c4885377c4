//! Chat message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A directed chat message between two users.
///
/// Ordering is by `created_at` only; the chat stream polls for rows newer
/// than the last one it delivered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// Message body.
    pub content: String,
    /// Sending user.
    pub sender_id: Uuid,
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Whether the receiver has read the message.
    pub is_read: bool,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
}

/// A message joined with sender/receiver display names for the chat UI.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MessageWithNames {
    /// Unique message identifier.
    pub id: Uuid,
    /// Message body.
    pub content: String,
    /// Sending user.
    pub sender_id: Uuid,
    /// Sender display name.
    pub sender_name: String,
    /// Whether the sender is an admin.
    pub sender_is_admin: bool,
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Receiver display name.
    pub receiver_name: String,
    /// Read flag.
    pub is_read: bool,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
}
