//! Credential store — durable persistence for the session token and user.
//!
//! DESIGN
//! ======
//! Exactly two logical values live here: the opaque session token and the
//! serialized user record. They are written together at login and cleared
//! together at logout; a store holding only one half describes a broken
//! session and is treated as empty by the session manager.
//!
//! ERROR HANDLING
//! ==============
//! Failures are explicit `Result`s at this boundary rather than swallowed
//! inside it. The session manager decides per operation: reads during
//! hydration and the clear during logout absorb errors (storage problems
//! degrade to "no session", never a crash), while writes during login
//! propagate so the caller can warn that the session may not survive a
//! restart.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::user::User;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value persistence for the session token and user record.
pub trait CredentialStore: Send + Sync {
    fn token(&self) -> Result<Option<String>, StoreError>;
    fn set_token(&self, token: &str) -> Result<(), StoreError>;
    fn user(&self) -> Result<Option<User>, StoreError>;
    fn set_user(&self, user: &User) -> Result<(), StoreError>;
    /// Remove both values. Best-effort: if one removal fails the other is
    /// still attempted, and the first error is returned.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<S: CredentialStore + ?Sized> CredentialStore for Arc<S> {
    fn token(&self) -> Result<Option<String>, StoreError> {
        (**self).token()
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        (**self).set_token(token)
    }

    fn user(&self) -> Result<Option<User>, StoreError> {
        (**self).user()
    }

    fn set_user(&self, user: &User) -> Result<(), StoreError> {
        (**self).set_user(user)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory backend. Used by tests and by embedders that do not want
/// sessions to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<&'static str, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<&'static str, String>> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryStore {
    fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .lock()
            .get(TOKEN_FILE)
            .cloned()
            .filter(|raw| !raw.is_empty()))
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.lock().insert(TOKEN_FILE, token.to_owned());
        Ok(())
    }

    fn user(&self) -> Result<Option<User>, StoreError> {
        let values = self.lock();
        let Some(raw) = values.get(USER_FILE) else {
            return Ok(None);
        };
        // An unreadable record is absent, not an error.
        Ok(serde_json::from_str(raw).ok())
    }

    fn set_user(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.lock().insert(USER_FILE, raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut values = self.lock();
        values.remove(TOKEN_FILE);
        values.remove(USER_FILE);
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// File-backed backend: one file per logical value under a state
/// directory. The moral equivalent of the browser's local storage.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, name: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.dir.join(name)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(name), contents)?;
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.dir.join(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl CredentialStore for FileStore {
    fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.read(TOKEN_FILE)?.filter(|raw| !raw.is_empty()))
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.write(TOKEN_FILE, token)
    }

    fn user(&self) -> Result<Option<User>, StoreError> {
        let Some(raw) = self.read(USER_FILE)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                // Corrupt record reads as absent; the next login rewrites it.
                warn!(error = %e, "stored user record is unreadable, treating as absent");
                Ok(None)
            }
        }
    }

    fn set_user(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.write(USER_FILE, &raw)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let token_result = self.remove(TOKEN_FILE);
        let user_result = self.remove(USER_FILE);
        token_result.and(user_result)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
