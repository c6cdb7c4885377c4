//! Direct messaging between users and admins.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_database::repositories::message::MessageRepository;
use streamgate_database::repositories::user::UserRepository;
use streamgate_entity::message::{Message, MessageWithNames};

use crate::context::RequestContext;

/// Handles chat message operations.
///
/// Regular users converse with support: their messages are routed to the
/// first admin account. Admins address any user explicitly and see the
/// full message log.
#[derive(Debug, Clone)]
pub struct ChatService {
    /// Message repository.
    message_repo: Arc<MessageRepository>,
    /// User repository, for admin routing.
    user_repo: Arc<UserRepository>,
}

impl ChatService {
    /// Creates a new chat service.
    pub fn new(message_repo: Arc<MessageRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            message_repo,
            user_repo,
        }
    }

    /// Sends a message from the acting user.
    ///
    /// Non-admin senders have their message routed to the first admin;
    /// an explicit `receiver_id` is required for admin senders.
    pub async fn send_message(
        &self,
        ctx: &RequestContext,
        content: &str,
        receiver_id: Option<Uuid>,
    ) -> Result<Message, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::validation("Message content is required"));
        }

        let receiver_id = match (ctx.is_admin(), receiver_id) {
            (true, Some(id)) => id,
            (true, None) => {
                return Err(AppError::validation("Receiver is required"));
            }
            (false, _) => self.first_admin_id().await?,
        };

        let message = self
            .message_repo
            .create(content, ctx.user_id(), receiver_id)
            .await?;

        debug!(sender_id = %ctx.user_id(), receiver_id = %receiver_id, "Message sent");

        Ok(message)
    }

    /// Lists the acting user's conversation, oldest first. Admins see
    /// every message.
    pub async fn list_messages(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<MessageWithNames>, AppError> {
        self.message_repo
            .find_for_user(ctx.user_id(), ctx.is_admin())
            .await
    }

    /// Returns messages newer than `after`, visible to the acting user.
    /// Backs the chat stream poll.
    pub async fn messages_since(
        &self,
        ctx: &RequestContext,
        after: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<MessageWithNames>, AppError> {
        self.message_repo
            .find_newer_than(ctx.user_id(), ctx.is_admin(), after, limit)
            .await
    }

    /// Marks a message as read. Only the receiver can do so; a miss is
    /// reported as not found.
    pub async fn mark_read(&self, ctx: &RequestContext, message_id: Uuid) -> Result<(), AppError> {
        if !self.message_repo.mark_read(message_id, ctx.user_id()).await? {
            return Err(AppError::not_found("Message not found"));
        }
        Ok(())
    }

    /// Resolves the admin account that receives support messages.
    pub(crate) async fn first_admin_id(&self) -> Result<Uuid, AppError> {
        self.user_repo
            .find_first_admin()
            .await?
            .map(|admin| admin.id)
            .ok_or_else(|| AppError::internal("No admin account available to receive messages"))
    }
}
