//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::role::Role;

/// A registered account.
///
/// The role is a single authoritative field on the user record —
/// every user has exactly one role, assigned at registration and
/// mutated only through the admin role-update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Argon2id PHC-format hash. Never serialized to clients.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user record.
///
/// The password is hashed by the auth layer before this struct is
/// built; the store never sees a plaintext password.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}
