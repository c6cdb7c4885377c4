//! The catalog assistant: an LLM-backed responder wired into the chat.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use streamgate_core::config::chat::ChatConfig;
use streamgate_core::error::AppError;
use streamgate_database::repositories::channel::ChannelRepository;
use streamgate_database::repositories::message::MessageRepository;
use streamgate_database::repositories::movie::MovieRepository;
use streamgate_database::repositories::series::SeriesRepository;
use streamgate_entity::message::Message;

use crate::chat::ChatService;
use crate::context::RequestContext;

/// Prefix that marks assistant replies in the chat log.
const BOT_PREFIX: &str = "🤖 ";

/// Answers catalog questions through an OpenAI-compatible completions
/// endpoint and records the exchange as regular chat messages.
#[derive(Debug, Clone)]
pub struct AssistantService {
    /// Assistant endpoint settings.
    config: ChatConfig,
    /// Shared HTTP client.
    http: reqwest::Client,
    /// Chat service, for message routing.
    chat: Arc<ChatService>,
    /// Message repository.
    message_repo: Arc<MessageRepository>,
    /// Movie repository, for prompt context.
    movie_repo: Arc<MovieRepository>,
    /// Series repository, for prompt context.
    series_repo: Arc<SeriesRepository>,
    /// Channel repository, for prompt context.
    channel_repo: Arc<ChannelRepository>,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionReply,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    content: String,
}

impl AssistantService {
    /// Creates a new assistant service.
    pub fn new(
        config: ChatConfig,
        http: reqwest::Client,
        chat: Arc<ChatService>,
        message_repo: Arc<MessageRepository>,
        movie_repo: Arc<MovieRepository>,
        series_repo: Arc<SeriesRepository>,
        channel_repo: Arc<ChannelRepository>,
    ) -> Self {
        Self {
            config,
            http,
            chat,
            message_repo,
            movie_repo,
            series_repo,
            channel_repo,
        }
    }

    /// Answers a user's question about the catalog.
    ///
    /// The question is stored as an ordinary support message, the model
    /// is queried with a catalog summary as context, and the reply is
    /// stored back into the same conversation from the support admin,
    /// marked with the bot prefix.
    pub async fn ask(&self, ctx: &RequestContext, question: &str) -> Result<Message, AppError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::validation("Message content is required"));
        }

        self.chat.send_message(ctx, question, None).await?;

        let system_prompt = self.build_system_prompt().await?;
        let reply = self.complete(&system_prompt, question).await?;

        let admin_id = self.chat.first_admin_id().await?;
        let content = format!("{BOT_PREFIX}{reply}");

        let message = self
            .message_repo
            .create(&content, admin_id, ctx.user_id())
            .await?;

        info!(user_id = %ctx.user_id(), "Assistant reply delivered");

        Ok(message)
    }

    /// Builds the system prompt from the current catalog contents.
    async fn build_system_prompt(&self) -> Result<String, AppError> {
        let movies = self.movie_repo.find_all().await?;
        let series = self.series_repo.find_all().await?;
        let channels = self.channel_repo.find_all().await?;

        let mut prompt = String::from(
            "You are the support assistant of a video streaming platform. \
             Answer briefly and only about the available catalog.\n\nMovies:\n",
        );
        for movie in &movies {
            prompt.push_str(&format!("- {} ({}, {})\n", movie.title, movie.genre, movie.year));
        }
        prompt.push_str("\nSeries:\n");
        for s in &series {
            prompt.push_str(&format!(
                "- {} ({}, {} seasons, {} episodes)\n",
                s.title, s.genre, s.seasons, s.episodes
            ));
        }
        prompt.push_str("\nLive channels:\n");
        for channel in &channels {
            prompt.push_str(&format!("- {}\n", channel.name));
        }

        Ok(prompt)
    }

    /// Calls the completions endpoint and extracts the reply text.
    async fn complete(&self, system_prompt: &str, question: &str) -> Result<String, AppError> {
        let request = CompletionRequest {
            model: &self.config.assistant_model,
            messages: vec![
                CompletionMessage {
                    role: "system",
                    content: system_prompt,
                },
                CompletionMessage {
                    role: "user",
                    content: question,
                },
            ],
            max_tokens: self.config.assistant_max_tokens,
            temperature: self.config.assistant_temperature,
        };

        let response = self
            .http
            .post(&self.config.assistant_url)
            .bearer_auth(&self.config.assistant_api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Assistant request failed");
                AppError::external_service("Assistant is unavailable")
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Assistant returned an error status");
            return Err(AppError::external_service("Assistant is unavailable"));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|_| AppError::external_service("Assistant returned an invalid response"))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::external_service("Assistant returned an empty response"))
    }
}
