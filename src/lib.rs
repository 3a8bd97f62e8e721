//! Authentication and session core for FinanceAI.
//!
//! ARCHITECTURE
//! ============
//! Four pieces, smallest first. The [`store`] module persists the session
//! token and user record behind the [`store::CredentialStore`] trait. The
//! [`directory`] module is the mock identity provider. The [`session`]
//! module owns the state machine: hydrate a persisted session once at
//! boot, then serve login/logout transitions and hand out immutable
//! snapshots. The [`guard`] module turns a snapshot plus a route's access
//! requirement into a pure render-or-redirect decision.
//!
//! ```no_run
//! use financeai_session::{Directory, MemoryStore, Requirement, SessionConfig, SessionManager, decide};
//!
//! # async fn run() -> Result<(), financeai_session::SessionError> {
//! let session = SessionManager::new(Directory::seeded(), MemoryStore::new(), SessionConfig::from_env());
//! session.hydrate();
//!
//! let user = session.login("admin@financeai.com", "admin123").await?;
//! let decision = decide(&session.snapshot(), Requirement::AuthenticatedRole(user.role));
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod guard;
pub mod session;
pub mod store;
pub mod user;

pub use directory::{Directory, DirectoryEntry};
pub use guard::{LOGIN_PATH, Requirement, RouteDecision, decide};
pub use session::{SessionConfig, SessionError, SessionManager, SessionSnapshot};
pub use store::{CredentialStore, FileStore, MemoryStore, StoreError};
pub use user::{Role, User};
