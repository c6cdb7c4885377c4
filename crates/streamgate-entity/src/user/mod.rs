//! User entity.

pub mod model;

pub use model::{CreateUser, PublicUser, UpdateUser, User};
