//! Episode management within a season.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_database::repositories::counters::CounterRepository;
use streamgate_database::repositories::episode::EpisodeRepository;
use streamgate_database::repositories::season::SeasonRepository;
use streamgate_entity::catalog::episode::{Episode, EpisodeInput};

use crate::context::RequestContext;

use super::require_admin;

/// Handles episode operations. Membership changes trigger a counter
/// recompute on the owning season and its series.
#[derive(Debug, Clone)]
pub struct EpisodeService {
    /// Episode repository.
    episode_repo: Arc<EpisodeRepository>,
    /// Season repository, for parent-existence checks.
    season_repo: Arc<SeasonRepository>,
    /// Counter recomputation.
    counter_repo: Arc<CounterRepository>,
}

impl EpisodeService {
    /// Creates a new episode service.
    pub fn new(
        episode_repo: Arc<EpisodeRepository>,
        season_repo: Arc<SeasonRepository>,
        counter_repo: Arc<CounterRepository>,
    ) -> Self {
        Self {
            episode_repo,
            season_repo,
            counter_repo,
        }
    }

    /// Lists every episode in the catalog, grouped by series and season.
    pub async fn list_all(&self) -> Result<Vec<Episode>, AppError> {
        self.episode_repo.find_all().await
    }

    /// Lists a season's episodes ordered by number.
    pub async fn list_by_season(&self, season_id: Uuid) -> Result<Vec<Episode>, AppError> {
        if self.season_repo.find_by_id(season_id).await?.is_none() {
            return Err(AppError::not_found("Season not found"));
        }
        self.episode_repo.find_by_season(season_id).await
    }

    /// Lists every episode of a series, ordered by season then episode
    /// number.
    pub async fn list_by_series(&self, series_id: Uuid) -> Result<Vec<Episode>, AppError> {
        self.episode_repo.find_by_series(series_id).await
    }

    /// Gets a single episode by ID.
    pub async fn get(&self, id: Uuid) -> Result<Episode, AppError> {
        self.episode_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Episode not found"))
    }

    /// Creates an episode, then recomputes the owning season's count and
    /// the series totals.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: EpisodeInput,
    ) -> Result<Episode, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let season_id = input
            .season_id
            .ok_or_else(|| AppError::validation("Season ID is required"))?;

        if self.season_repo.find_by_id(season_id).await?.is_none() {
            return Err(AppError::not_found("Season not found"));
        }

        if self
            .episode_repo
            .find_by_number(season_id, input.number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Episode {} already exists in this season",
                input.number
            )));
        }

        let episode = self.episode_repo.create(season_id, &input).await?;

        self.counter_repo.recompute_season(season_id).await?;

        info!(
            admin_id = %ctx.user_id(),
            episode_id = %episode.id,
            season_id = %season_id,
            number = episode.number,
            "Episode created"
        );

        Ok(episode)
    }

    /// Updates an episode in place. Membership is unaffected, so no
    /// recompute runs.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: EpisodeInput,
    ) -> Result<Episode, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let existing = self
            .episode_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Episode not found"))?;

        if let Some(other) = self
            .episode_repo
            .find_by_number(existing.season_id, input.number)
            .await?
        {
            if other.id != id {
                return Err(AppError::conflict(format!(
                    "Episode {} already exists in this season",
                    input.number
                )));
            }
        }

        let episode = self
            .episode_repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Episode not found"))?;

        info!(admin_id = %ctx.user_id(), episode_id = %id, "Episode updated");

        Ok(episode)
    }

    /// Deletes an episode, then recomputes the owning season's count and
    /// the series totals.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        require_admin(ctx)?;

        let episode = self
            .episode_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Episode not found"))?;

        if !self.episode_repo.delete(id).await? {
            return Err(AppError::not_found("Episode not found"));
        }

        self.counter_repo.recompute_season(episode.season_id).await?;

        info!(
            admin_id = %ctx.user_id(),
            episode_id = %id,
            season_id = %episode.season_id,
            "Episode deleted"
        );

        Ok(())
    }
}

fn validate(input: &EpisodeInput) -> Result<(), AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    if input.number < 1 {
        return Err(AppError::validation("Episode number must be at least 1"));
    }
    if input.video_url.trim().is_empty() {
        return Err(AppError::validation("Video URL is required"));
    }
    Ok(())
}
