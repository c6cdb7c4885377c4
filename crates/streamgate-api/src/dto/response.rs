//! Response DTOs. Every success body carries `success: true` with the
//! payload fields flattened beside it.

use serde::{Deserialize, Serialize};

use streamgate_entity::catalog::channel::Channel;
use streamgate_entity::catalog::episode::Episode;
use streamgate_entity::catalog::movie::Movie;
use streamgate_entity::catalog::season::{Season, SeasonWithEpisodes};
use streamgate_entity::catalog::series::SeriesWithSeasons;
use streamgate_entity::message::{Message, MessageWithNames};
use streamgate_entity::user::{PublicUser, User};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true`.
    pub success: bool,
    /// Payload fields, flattened into the envelope.
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Public projection of the authenticated user.
    pub user: PublicUser,
    /// The session token, also set as the auth cookie.
    pub token: String,
}

/// Identity payload for `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityPayload {
    /// The verified user.
    pub user: PublicUser,
}

/// Simple status message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Human-readable status.
    pub message: String,
}

/// User list payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersPayload {
    /// All users, newest first.
    pub users: Vec<User>,
}

/// Single user payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    /// The affected user.
    pub user: User,
}

/// Movie list payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviesPayload {
    /// All movies, newest first.
    pub movies: Vec<Movie>,
}

/// Single movie payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviePayload {
    /// The affected movie.
    pub movie: Movie,
}

/// Series list payload, each entry with its season/episode tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesListPayload {
    /// All series with their trees.
    pub series: Vec<SeriesWithSeasons>,
}

/// Single series payload with its tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPayload {
    /// The affected series.
    pub series: SeriesWithSeasons,
}

/// Season list payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonsPayload {
    /// Seasons ordered by number.
    pub seasons: Vec<Season>,
}

/// Single season payload with episodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonPayload {
    /// The affected season.
    pub season: SeasonWithEpisodes,
}

/// Episode list payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodesPayload {
    /// Episodes ordered by number.
    pub episodes: Vec<Episode>,
}

/// Single episode payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodePayload {
    /// The affected episode.
    pub episode: Episode,
}

/// Channel list payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelsPayload {
    /// All channels.
    pub channels: Vec<Channel>,
}

/// Single channel payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPayload {
    /// The affected channel.
    pub channel: Channel,
}

/// Message list payload with display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesPayload {
    /// Messages, oldest first.
    pub messages: Vec<MessageWithNames>,
}

/// Single message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayload {
    /// The stored message.
    pub message: Message,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_flattens_the_payload() {
        let body = ApiResponse::ok(StatusMessage {
            message: "Logged out".to_string(),
        });
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Logged out");
        assert!(json.get("data").is_none());
    }
}
