//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use streamgate_entity::user::PublicUser;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that every
/// operation knows *who* is acting. The user inside has already passed
/// the full token verification, including the suspension re-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The verified public projection of the acting user.
    pub user: PublicUser,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: PublicUser) -> Self {
        Self { user }
    }

    /// The acting user's ID.
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }
}
