//! HTTP request handlers, one module per domain.

pub mod auth;
pub mod channel;
pub mod chat;
pub mod episode;
pub mod health;
pub mod message;
pub mod movie;
pub mod season;
pub mod series;
pub mod user;
