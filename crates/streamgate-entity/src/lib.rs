//! # streamgate-entity
//!
//! Plain data models for every Streamgate table: users, sessions, the
//! movie/series/season/episode catalog, live channels, and chat messages.
//! Models derive `sqlx::FromRow` for query mapping and serde for the API.

pub mod catalog;
pub mod message;
pub mod session;
pub mod user;
