//! Session manager — the authentication state machine.
//!
//! ARCHITECTURE
//! ============
//! One `SessionManager` instance owns the session for the whole app
//! lifetime: boot in the hydrating state, replay a persisted session from
//! the credential store exactly once, then serve login/logout transitions.
//! Consumers read immutable snapshots; the route gate in `guard` decides
//! render-vs-redirect from the same snapshots.
//!
//! TRADE-OFFS
//! ==========
//! Every login stamps an epoch and re-checks it after the simulated
//! network latency. A logout (or a newer login) during the wait bumps the
//! epoch, so the stale login resolves as `Superseded` without committing
//! anything — logout always wins over an in-flight login.

use std::fmt::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};

use crate::directory::Directory;
use crate::store::{CredentialStore, StoreError};
use crate::user::User;

const DEFAULT_LOGIN_LATENCY_MS: u64 = 800;

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// TOKEN GENERATION
// =============================================================================

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate an opaque session token: random hex, the user id, and a unix
/// timestamp joined by `.`. Callers must not parse it.
#[must_use]
pub(crate) fn generate_token(user_id: &str) -> String {
    let bytes: [u8; 16] = rand::rng().random();
    let ts = time::OffsetDateTime::now_utc().unix_timestamp();
    format!("{}.{user_id}.{ts}", bytes_to_hex(&bytes))
}

// =============================================================================
// CONFIG / SNAPSHOT / ERRORS
// =============================================================================

/// Tuning knobs for the session manager, loaded from environment variables.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Simulated network latency for `login`.
    pub login_latency: Duration,
}

impl SessionConfig {
    /// Load from `AUTH_LOGIN_LATENCY_MS` (milliseconds, default 800).
    #[must_use]
    pub fn from_env() -> Self {
        let latency_ms = env_parse("AUTH_LOGIN_LATENCY_MS", DEFAULT_LOGIN_LATENCY_MS);
        Self { login_latency: Duration::from_millis(latency_ms) }
    }
}

/// Immutable view of the session, as consumed by UI and the route gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Current user, `None` when unauthenticated.
    pub user: Option<User>,
    /// True during startup hydration and while a login is in flight.
    pub is_loading: bool,
}

impl SessionSnapshot {
    /// Derived, never stored independently: authenticated means a user is
    /// present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Never reveals which of email or password was wrong.
    #[error("Email ou senha inválidos")]
    InvalidCredentials,
    /// The session changed (logout or a newer login) while this login was
    /// waiting; nothing was committed.
    #[error("login superseded by a newer session change")]
    Superseded,
    /// The session was authenticated in the directory but could not be
    /// persisted; it will not survive a restart.
    #[error("failed to persist session: {0}")]
    Persistence(#[from] StoreError),
}

// =============================================================================
// SESSION MANAGER
// =============================================================================

struct Inner {
    user: Option<User>,
    is_loading: bool,
    hydrated: bool,
    /// Bumped by every login start and every logout; a login may only
    /// commit if the epoch it stamped is still current.
    epoch: u64,
}

/// The authentication state machine. Cheap to clone; all clones share the
/// same session.
#[derive(Clone)]
pub struct SessionManager {
    directory: Arc<Directory>,
    store: Arc<dyn CredentialStore>,
    config: SessionConfig,
    inner: Arc<Mutex<Inner>>,
}

impl SessionManager {
    /// Boot state: no user, loading until `hydrate` runs.
    #[must_use]
    pub fn new(directory: Directory, store: impl CredentialStore + 'static, config: SessionConfig) -> Self {
        Self {
            directory: Arc::new(directory),
            store: Arc::new(store),
            config,
            inner: Arc::new(Mutex::new(Inner {
                user: None,
                is_loading: true,
                hydrated: false,
                epoch: 0,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Read accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.lock();
        SessionSnapshot { user: inner.user.clone(), is_loading: inner.is_loading }
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.lock().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().user.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Replay a persisted session. Runs once per manager lifetime;
    /// subsequent calls are no-ops. Only reads the store, never writes:
    /// a broken half-pair (token without user, or vice versa) is treated
    /// as no session rather than repaired or guessed at.
    pub fn hydrate(&self) {
        let mut inner = self.lock();
        if inner.hydrated {
            return;
        }
        inner.hydrated = true;

        let token = self.store.token().unwrap_or_else(|e| {
            warn!(error = %e, "token read failed during hydration");
            None
        });
        let user = self.store.user().unwrap_or_else(|e| {
            warn!(error = %e, "user read failed during hydration");
            None
        });

        if let (Some(_), Some(user)) = (token, user) {
            info!(user_id = %user.id, role = %user.role, "session restored from store");
            inner.user = Some(user);
        }
        inner.is_loading = false;
    }

    /// Authenticate against the directory. The loading flag flips before
    /// the latency sleep, so callers observe a spinner-worthy state
    /// synchronously. On success the token and user are persisted together
    /// and the user becomes current; on any failure the state is left
    /// unauthenticated with `is_loading` reset.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        let epoch = {
            let mut inner = self.lock();
            inner.is_loading = true;
            inner.epoch += 1;
            inner.epoch
        };

        tokio::time::sleep(self.config.login_latency).await;

        let found = self.directory.find_by_credentials(email, password).cloned();

        let mut inner = self.lock();
        if inner.epoch != epoch {
            // Logout or a newer login took over while we were waiting.
            return Err(SessionError::Superseded);
        }

        let Some(user) = found else {
            inner.is_loading = false;
            return Err(SessionError::InvalidCredentials);
        };

        let token = generate_token(&user.id);
        if let Err(e) = self
            .store
            .set_token(&token)
            .and_then(|()| self.store.set_user(&user))
        {
            // Roll back a half-written pair so the store never holds a
            // token without a user.
            if let Err(clear_err) = self.store.clear() {
                warn!(error = %clear_err, "rollback clear failed after login write error");
            }
            inner.is_loading = false;
            return Err(SessionError::Persistence(e));
        }

        info!(user_id = %user.id, role = %user.role, "login succeeded");
        inner.user = Some(user.clone());
        inner.is_loading = false;
        Ok(user)
    }

    /// Clear the session. Synchronous, idempotent, and infallible from the
    /// caller's view: a store failure is logged and the in-memory state is
    /// cleared regardless. Defeats any login still in flight.
    pub fn logout(&self) {
        let mut inner = self.lock();
        inner.epoch += 1;
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "credential store clear failed during logout");
        }
        if inner.user.is_some() {
            info!("logout");
        }
        inner.user = None;
        inner.is_loading = false;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
