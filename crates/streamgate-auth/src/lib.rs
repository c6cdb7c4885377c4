//! # streamgate-auth
//!
//! Authentication for Streamgate: JWT issuance and validation, Argon2id
//! password hashing, session persistence, and the [`Authenticator`] that
//! ties them together into the login / verify / logout flows.

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod session;

pub use authenticator::{Authenticator, LoginOutcome};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use session::SessionStore;
