//! Catalog entities: movies, the series hierarchy, and live channels.

pub mod channel;
pub mod episode;
pub mod movie;
pub mod season;
pub mod series;

pub use channel::{Channel, ChannelInput};
pub use episode::{Episode, EpisodeInput};
pub use movie::{Movie, MovieInput};
pub use season::{Season, SeasonInput, SeasonWithEpisodes};
pub use series::{Series, SeriesInput, SeriesWithSeasons};
