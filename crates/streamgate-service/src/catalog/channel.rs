//! Live TV channel management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_database::repositories::channel::ChannelRepository;
use streamgate_entity::catalog::channel::{Channel, ChannelInput};

use crate::context::RequestContext;

use super::require_admin;

/// Handles live TV channel operations.
#[derive(Debug, Clone)]
pub struct ChannelService {
    /// Channel repository.
    channel_repo: Arc<ChannelRepository>,
}

impl ChannelService {
    /// Creates a new channel service.
    pub fn new(channel_repo: Arc<ChannelRepository>) -> Self {
        Self { channel_repo }
    }

    /// Lists all channels.
    pub async fn list(&self) -> Result<Vec<Channel>, AppError> {
        self.channel_repo.find_all().await
    }

    /// Gets a single channel by ID.
    pub async fn get(&self, id: Uuid) -> Result<Channel, AppError> {
        self.channel_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Channel not found"))
    }

    /// Creates a channel.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: ChannelInput,
    ) -> Result<Channel, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let channel = self.channel_repo.create(&input).await?;
        info!(admin_id = %ctx.user_id(), channel_id = %channel.id, name = %channel.name, "Channel created");
        Ok(channel)
    }

    /// Replaces a channel's fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: ChannelInput,
    ) -> Result<Channel, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let channel = self
            .channel_repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Channel not found"))?;

        info!(admin_id = %ctx.user_id(), channel_id = %id, "Channel updated");
        Ok(channel)
    }

    /// Deletes a channel.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        require_admin(ctx)?;

        if !self.channel_repo.delete(id).await? {
            return Err(AppError::not_found("Channel not found"));
        }

        info!(admin_id = %ctx.user_id(), channel_id = %id, "Channel deleted");
        Ok(())
    }
}

fn validate(input: &ChannelInput) -> Result<(), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if input.m3u8_url.trim().is_empty() {
        return Err(AppError::validation("Stream URL is required"));
    }
    Ok(())
}
