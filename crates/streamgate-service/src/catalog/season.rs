//! Season management within a series.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_database::repositories::counters::CounterRepository;
use streamgate_database::repositories::episode::EpisodeRepository;
use streamgate_database::repositories::season::SeasonRepository;
use streamgate_database::repositories::series::SeriesRepository;
use streamgate_entity::catalog::season::{Season, SeasonInput, SeasonWithEpisodes};

use crate::context::RequestContext;

use super::require_admin;

/// Handles season operations. Membership changes trigger a counter
/// recompute on the owning series.
#[derive(Debug, Clone)]
pub struct SeasonService {
    /// Season repository.
    season_repo: Arc<SeasonRepository>,
    /// Series repository, for parent-existence checks.
    series_repo: Arc<SeriesRepository>,
    /// Episode repository, for the detail view.
    episode_repo: Arc<EpisodeRepository>,
    /// Counter recomputation.
    counter_repo: Arc<CounterRepository>,
}

impl SeasonService {
    /// Creates a new season service.
    pub fn new(
        season_repo: Arc<SeasonRepository>,
        series_repo: Arc<SeriesRepository>,
        episode_repo: Arc<EpisodeRepository>,
        counter_repo: Arc<CounterRepository>,
    ) -> Self {
        Self {
            season_repo,
            series_repo,
            episode_repo,
            counter_repo,
        }
    }

    /// Lists every season across all series, grouped by series.
    pub async fn list_all(&self) -> Result<Vec<Season>, AppError> {
        self.season_repo.find_all().await
    }

    /// Lists a series' seasons ordered by number.
    pub async fn list_by_series(&self, series_id: Uuid) -> Result<Vec<Season>, AppError> {
        if self.series_repo.find_by_id(series_id).await?.is_none() {
            return Err(AppError::not_found("Series not found"));
        }
        self.season_repo.find_by_series(series_id).await
    }

    /// Gets a season with its episodes ordered by number.
    pub async fn get_with_episodes(&self, id: Uuid) -> Result<SeasonWithEpisodes, AppError> {
        let season = self
            .season_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Season not found"))?;

        let episodes = self.episode_repo.find_by_season(season.id).await?;

        Ok(SeasonWithEpisodes { season, episodes })
    }

    /// Creates a season, then recomputes the owning series' counters.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: SeasonInput,
    ) -> Result<Season, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let series_id = input
            .series_id
            .ok_or_else(|| AppError::validation("Series ID is required"))?;

        if self.series_repo.find_by_id(series_id).await?.is_none() {
            return Err(AppError::not_found("Series not found"));
        }

        if self
            .season_repo
            .find_by_number(series_id, input.number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Season {} already exists in this series",
                input.number
            )));
        }

        let season = self.season_repo.create(series_id, &input).await?;

        self.counter_repo.recompute_series(series_id).await?;

        info!(
            admin_id = %ctx.user_id(),
            season_id = %season.id,
            series_id = %series_id,
            number = season.number,
            "Season created"
        );

        Ok(season)
    }

    /// Updates a season in place. The owning series never changes, and
    /// membership is unaffected, so no recompute runs.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: SeasonInput,
    ) -> Result<Season, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let existing = self
            .season_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Season not found"))?;

        if let Some(other) = self
            .season_repo
            .find_by_number(existing.series_id, input.number)
            .await?
        {
            if other.id != id {
                return Err(AppError::conflict(format!(
                    "Season {} already exists in this series",
                    input.number
                )));
            }
        }

        let season = self
            .season_repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Season not found"))?;

        info!(admin_id = %ctx.user_id(), season_id = %id, "Season updated");

        Ok(season)
    }

    /// Deletes a season (cascading to its episodes), then recomputes the
    /// owning series' counters.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        require_admin(ctx)?;

        let season = self
            .season_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Season not found"))?;

        if !self.season_repo.delete(id).await? {
            return Err(AppError::not_found("Season not found"));
        }

        self.counter_repo.recompute_series(season.series_id).await?;

        info!(
            admin_id = %ctx.user_id(),
            season_id = %id,
            series_id = %season.series_id,
            "Season deleted"
        );

        Ok(())
    }
}

fn validate(input: &SeasonInput) -> Result<(), AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    if input.number < 1 {
        return Err(AppError::validation("Season number must be at least 1"));
    }
    Ok(())
}
