//! Catalog services: movies, series, seasons, episodes, channels.
//!
//! Reads are open to any authenticated user; mutations require admin.
//! Season and episode membership changes recompute the denormalized
//! counters on the affected series.

pub mod channel;
pub mod episode;
pub mod movie;
pub mod season;
pub mod series;

pub use channel::ChannelService;
pub use episode::EpisodeService;
pub use movie::MovieService;
pub use season::SeasonService;
pub use series::SeriesService;

use streamgate_core::error::AppError;

use crate::context::RequestContext;

/// Rejects non-admin callers from mutating catalog endpoints.
pub(crate) fn require_admin(ctx: &RequestContext) -> Result<(), AppError> {
    if ctx.is_admin() {
        Ok(())
    } else {
        Err(AppError::forbidden("Admin access required"))
    }
}
