//! User identity types shared across the session core.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Access role attached to every account.
///
/// Serialized lowercase (`"admin"` / `"user"`) to match the persisted
/// user record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Landing route for this role after a successful login or a
    /// role-mismatch redirect.
    #[must_use]
    pub const fn home_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::User => "/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::User => f.write_str("user"),
        }
    }
}

/// An authenticated identity, as held in session state and persisted in
/// the credential store. Never carries the account secret: directory
/// entries pair a `User` with a password, and login hands out only the
/// `User` half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, unique within the directory.
    pub email: String,
    pub role: Role,
    /// Avatar image URL, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
