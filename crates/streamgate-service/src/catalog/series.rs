//! Series catalog management and detail-tree assembly.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_database::repositories::episode::EpisodeRepository;
use streamgate_database::repositories::season::SeasonRepository;
use streamgate_database::repositories::series::SeriesRepository;
use streamgate_entity::catalog::season::SeasonWithEpisodes;
use streamgate_entity::catalog::series::{Series, SeriesInput, SeriesWithSeasons};

use crate::context::RequestContext;

use super::require_admin;

/// Handles series catalog operations.
#[derive(Debug, Clone)]
pub struct SeriesService {
    /// Series repository.
    series_repo: Arc<SeriesRepository>,
    /// Season repository.
    season_repo: Arc<SeasonRepository>,
    /// Episode repository.
    episode_repo: Arc<EpisodeRepository>,
}

impl SeriesService {
    /// Creates a new series service.
    pub fn new(
        series_repo: Arc<SeriesRepository>,
        season_repo: Arc<SeasonRepository>,
        episode_repo: Arc<EpisodeRepository>,
    ) -> Self {
        Self {
            series_repo,
            season_repo,
            episode_repo,
        }
    }

    /// Lists all series, newest first. Counter fields come straight from
    /// the stored rows.
    pub async fn list(&self) -> Result<Vec<Series>, AppError> {
        self.series_repo.find_all().await
    }

    /// Lists all series, each with its full season/episode tree.
    pub async fn list_with_seasons(&self) -> Result<Vec<SeriesWithSeasons>, AppError> {
        let all = self.series_repo.find_all().await?;

        let mut result = Vec::with_capacity(all.len());
        for series in all {
            result.push(self.assemble_tree(series).await?);
        }
        Ok(result)
    }

    /// Gets a series together with its full season/episode tree.
    ///
    /// Seasons come back ordered by number, each carrying its episodes
    /// ordered by number.
    pub async fn get_with_seasons(&self, id: Uuid) -> Result<SeriesWithSeasons, AppError> {
        let series = self
            .series_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Series not found"))?;

        self.assemble_tree(series).await
    }

    async fn assemble_tree(&self, series: Series) -> Result<SeriesWithSeasons, AppError> {
        let seasons = self.season_repo.find_by_series(series.id).await?;

        let mut seasons_list = Vec::with_capacity(seasons.len());
        for season in seasons {
            let episodes = self.episode_repo.find_by_season(season.id).await?;
            seasons_list.push(SeasonWithEpisodes { season, episodes });
        }

        Ok(SeriesWithSeasons {
            series,
            seasons_list,
        })
    }

    /// Creates a series. Both counters start at zero.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: SeriesInput,
    ) -> Result<Series, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let series = self.series_repo.create(&input).await?;
        info!(admin_id = %ctx.user_id(), series_id = %series.id, title = %series.title, "Series created");
        Ok(series)
    }

    /// Replaces a series' descriptive fields. Counters are untouched.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: SeriesInput,
    ) -> Result<Series, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let series = self
            .series_repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Series not found"))?;

        info!(admin_id = %ctx.user_id(), series_id = %id, "Series updated");
        Ok(series)
    }

    /// Deletes a series and, through cascade, its seasons and episodes.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        require_admin(ctx)?;

        if !self.series_repo.delete(id).await? {
            return Err(AppError::not_found("Series not found"));
        }

        info!(admin_id = %ctx.user_id(), series_id = %id, "Series deleted");
        Ok(())
    }
}

fn validate(input: &SeriesInput) -> Result<(), AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    Ok(())
}
