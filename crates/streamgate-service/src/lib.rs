//! # streamgate-service
//!
//! Business logic service layer for Streamgate. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases: catalog management with derived counters, user administration,
//! chat, and the catalog assistant.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod catalog;
pub mod chat;
pub mod context;
pub mod seed;
pub mod user;

pub use catalog::{ChannelService, EpisodeService, MovieService, SeasonService, SeriesService};
pub use chat::{AssistantService, ChatService};
pub use context::RequestContext;
pub use seed::Seeder;
pub use user::AdminUserService;
