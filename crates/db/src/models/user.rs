//! Accounts.

use carenest_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row of `users`, password hash included.
///
/// Deliberately not `Serialize`: handlers convert to [`UserResponse`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    /// Lowercased and trimmed at registration; unique.
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// The public view of an account returned by the auth endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub member_since: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            member_since: user.created_at,
        }
    }
}

/// Insert payload. `email` is expected in normalised form.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
