//! User domain types.
//!
//! Two shapes on purpose: the stored record carries the password hash and
//! never leaves the store layer; the session record is the public subset
//! written under the session-pointer key and handed to callers.

use serde::{Deserialize, Serialize};

use tamarind_core::{Email, UserId};

/// A user record as persisted in the `auth_users` array.
///
/// Created once at registration and never updated. The `password_hash`
/// field is an Argon2id PHC string and must never be echoed to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    /// Unique user ID, generated at registration.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address; the natural key, unique case-insensitively.
    pub email: Email,
    /// Argon2id hash of the password.
    pub password_hash: String,
    /// Generated avatar image URL.
    pub avatar_url: String,
}

/// The public subset of a user record.
///
/// This is what the session pointer stores and what `current_user` returns.
/// There is deliberately no password field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Generated avatar image URL.
    pub avatar_url: String,
}

impl From<&StoredUser> for SessionUser {
    fn from(user: &StoredUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}
