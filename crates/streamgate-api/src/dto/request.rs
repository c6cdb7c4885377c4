//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login request. The password alone identifies the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The account password.
    pub password: String,
    /// Identifier of the logging-in device; enables the device limit.
    #[serde(default)]
    pub device_id: Option<String>,
}

/// Chat message submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Message body.
    pub content: String,
    /// Explicit receiver; required for admin senders, ignored otherwise.
    #[serde(default)]
    pub receiver_id: Option<Uuid>,
}

/// Question for the catalog assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotRequest {
    /// The user's question.
    pub message: String,
}
