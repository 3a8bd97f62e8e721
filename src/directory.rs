//! Mock identity directory.
//!
//! Stands in for a real identity provider: a fixed in-memory list of
//! accounts answering "does this email + password pair belong to a known
//! user?". A production backend would replace this with a network call and
//! must not compare secrets with plain equality; the mock keeps it simple
//! because the passwords here are demo fixtures, not real credentials.

use crate::user::{Role, User};

/// One directory account: the public user record plus its password.
/// The password never leaves this module; lookups hand out only the
/// `User` half.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    user: User,
    password: String,
}

impl DirectoryEntry {
    #[must_use]
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self { user, password: password.into() }
    }
}

/// Fixed list of known accounts.
#[derive(Debug, Clone)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
}

impl Directory {
    #[must_use]
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries }
    }

    /// The stock demo accounts shipped with the product.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            DirectoryEntry::new(
                User {
                    id: "1".into(),
                    name: "Administrador".into(),
                    email: "admin@financeai.com".into(),
                    role: Role::Admin,
                    avatar: Some("/avatars/admin.png".into()),
                },
                "admin123",
            ),
            DirectoryEntry::new(
                User {
                    id: "2".into(),
                    name: "João Silva".into(),
                    email: "usuario@financeai.com".into(),
                    role: Role::User,
                    avatar: Some("/avatars/user.png".into()),
                },
                "user123",
            ),
        ])
    }

    /// Exact, case-sensitive match on both email and password.
    /// Returns the user record without its secret, or `None`.
    #[must_use]
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&User> {
        self.entries
            .iter()
            .find(|entry| entry.user.email == email && entry.password == password)
            .map(|entry| &entry.user)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
