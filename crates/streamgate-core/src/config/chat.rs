//! Chat stream and assistant configuration.

use serde::{Deserialize, Serialize};

/// Chat polling and LLM assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Interval between message re-queries on the chat stream, in seconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Maximum messages returned per poll.
    #[serde(default = "default_poll_batch")]
    pub poll_batch_size: i64,
    /// OpenAI-compatible chat completions endpoint for the assistant.
    #[serde(default = "default_assistant_url")]
    pub assistant_url: String,
    /// API key for the assistant endpoint.
    #[serde(default)]
    pub assistant_api_key: String,
    /// Model name sent to the assistant endpoint.
    #[serde(default = "default_assistant_model")]
    pub assistant_model: String,
    /// Token budget for assistant replies.
    #[serde(default = "default_max_tokens")]
    pub assistant_max_tokens: u32,
    /// Sampling temperature for assistant replies.
    #[serde(default = "default_temperature")]
    pub assistant_temperature: f32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: default_poll_interval(),
            poll_batch_size: default_poll_batch(),
            assistant_url: default_assistant_url(),
            assistant_api_key: String::new(),
            assistant_model: default_assistant_model(),
            assistant_max_tokens: default_max_tokens(),
            assistant_temperature: default_temperature(),
        }
    }
}

fn default_poll_interval() -> u64 {
    2
}

fn default_poll_batch() -> i64 {
    50
}

fn default_assistant_url() -> String {
    "https://apps.abacus.ai/v1/chat/completions".to_string()
}

fn default_assistant_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_max_tokens() -> u32 {
    300
}

fn default_temperature() -> f32 {
    0.7
}
