//! Denormalized counter maintenance for the Series → Season → Episode
//! hierarchy.
//!
//! Counters are never incremented in place. After every membership-changing
//! mutation the affected aggregates are recomputed from the current rows
//! (read-recompute-write) inside a single transaction, so two concurrent
//! mutations cannot leave a counter reflecting only one of them.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use streamgate_core::error::{AppError, ErrorKind};
use streamgate_core::result::AppResult;

/// Recomputes and persists the derived season/episode counters.
#[derive(Debug, Clone)]
pub struct CounterRepository {
    pool: PgPool,
}

/// A season id paired with its current episode count, as read inside the
/// recompute transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct SeasonEpisodeCount {
    /// Season primary key.
    pub season_id: Uuid,
    /// Number of episode rows currently owned by the season.
    pub episode_count: i64,
}

/// Aggregate totals derived from a series' current season set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesTotals {
    /// Number of seasons.
    pub seasons: i64,
    /// Sum of episode counts across all seasons.
    pub episodes: i64,
}

/// Derive series-level totals from the per-season episode counts.
pub fn series_totals(counts: &[SeasonEpisodeCount]) -> SeriesTotals {
    SeriesTotals {
        seasons: counts.len() as i64,
        episodes: counts.iter().map(|c| c.episode_count).sum(),
    }
}

impl CounterRepository {
    /// Create a new counter repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Recompute counters after an episode was created or deleted.
    ///
    /// Rewrites the season's `total_episodes` from its episode set and the
    /// owning series' `seasons`/`episodes` from the full season list. Must
    /// not be called for episode updates that keep the same season.
    pub async fn recompute_season(&self, season_id: Uuid) -> AppResult<()> {
        let mut tx = self.begin().await?;

        let series_id: Option<Uuid> =
            sqlx::query_scalar("SELECT series_id FROM seasons WHERE id = $1")
                .bind(season_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to resolve season owner", e)
                })?;

        let Some(series_id) = series_id else {
            // Season vanished between the mutation and the recompute; the
            // series-level recompute on season delete covers this path.
            return Ok(());
        };

        sqlx::query(
            "UPDATE seasons SET total_episodes = \
                 (SELECT COUNT(*) FROM episodes WHERE season_id = $1) \
             WHERE id = $1",
        )
        .bind(season_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update season counter", e)
        })?;

        self.write_series_totals(&mut tx, series_id).await?;

        self.commit(tx).await
    }

    /// Recompute counters after a season was created or deleted.
    ///
    /// Rewrites the series' `seasons`/`episodes` and every remaining
    /// season's `total_episodes`, covering per-season counts left stale by
    /// a whole-season delete.
    pub async fn recompute_series(&self, series_id: Uuid) -> AppResult<()> {
        let mut tx = self.begin().await?;

        sqlx::query(
            "UPDATE seasons SET total_episodes = \
                 (SELECT COUNT(*) FROM episodes WHERE season_id = seasons.id) \
             WHERE series_id = $1",
        )
        .bind(series_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update season counters", e)
        })?;

        self.write_series_totals(&mut tx, series_id).await?;

        self.commit(tx).await
    }

    /// Read the per-season episode counts and persist the derived series
    /// totals, all within the caller's transaction.
    async fn write_series_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        series_id: Uuid,
    ) -> AppResult<()> {
        let counts = sqlx::query_as::<_, SeasonEpisodeCount>(
            "SELECT s.id AS season_id, \
                    (SELECT COUNT(*) FROM episodes e WHERE e.season_id = s.id) AS episode_count \
             FROM seasons s WHERE s.series_id = $1",
        )
        .bind(series_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read season counts", e)
        })?;

        let totals = series_totals(&counts);

        sqlx::query("UPDATE series SET seasons = $2, episodes = $3 WHERE id = $1")
            .bind(series_id)
            .bind(totals.seasons as i32)
            .bind(totals.episodes as i32)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update series counters", e)
            })?;

        Ok(())
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }

    async fn commit(&self, tx: Transaction<'_, Postgres>) -> AppResult<()> {
        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit recompute", e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: i64) -> SeasonEpisodeCount {
        SeasonEpisodeCount {
            season_id: Uuid::new_v4(),
            episode_count: n,
        }
    }

    #[test]
    fn totals_of_empty_series_are_zero() {
        let totals = series_totals(&[]);
        assert_eq!(totals.seasons, 0);
        assert_eq!(totals.episodes, 0);
    }

    #[test]
    fn totals_sum_across_seasons() {
        let totals = series_totals(&[count(3), count(0), count(7)]);
        assert_eq!(totals.seasons, 3);
        assert_eq!(totals.episodes, 10);
    }

    #[test]
    fn empty_seasons_still_counted() {
        let totals = series_totals(&[count(0), count(0)]);
        assert_eq!(totals.seasons, 2);
        assert_eq!(totals.episodes, 0);
    }
}
