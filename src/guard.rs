//! Route authorization gate.
//!
//! DESIGN
//! ======
//! A pure decision function over the current session snapshot and the
//! access requirement a route declares. It owns no state and renders
//! nothing, so every routing rule is unit-testable without mounting a
//! view. Routers map `RedirectToLogin` / `RedirectToHome` onto
//! navigations via `RouteDecision::target_path`.

use crate::session::SessionSnapshot;
use crate::user::Role;

/// Login entry point consumers redirect to.
pub const LOGIN_PATH: &str = "/login";

/// Access requirement declared by a guarded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Anyone may view, but an authenticated user is sent home instead
    /// (the "don't show me the login page again" behavior).
    Public,
    /// Any authenticated user.
    AuthenticatedAny,
    /// An authenticated user holding exactly this role.
    AuthenticatedRole(Role),
}

/// Outcome of evaluating a guarded navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested content.
    Render,
    /// Hydration or a login is in flight; show a placeholder. Emitted
    /// before anything else so the gate never flashes a redirect while
    /// the session is still being restored.
    Loading,
    RedirectToLogin,
    /// The user is valid but misplaced; send them to their own landing
    /// page, never back to login.
    RedirectToHome(Role),
}

impl RouteDecision {
    /// Navigation target for redirect outcomes, `None` otherwise.
    #[must_use]
    pub const fn target_path(self) -> Option<&'static str> {
        match self {
            RouteDecision::RedirectToLogin => Some(LOGIN_PATH),
            RouteDecision::RedirectToHome(role) => Some(role.home_path()),
            RouteDecision::Render | RouteDecision::Loading => None,
        }
    }
}

/// Evaluate a requirement against the session. First match wins.
#[must_use]
pub fn decide(session: &SessionSnapshot, requirement: Requirement) -> RouteDecision {
    if session.is_loading {
        return RouteDecision::Loading;
    }

    match (requirement, &session.user) {
        (Requirement::Public, Some(user)) => RouteDecision::RedirectToHome(user.role),
        (Requirement::Public, None) => RouteDecision::Render,

        (Requirement::AuthenticatedAny, Some(_)) => RouteDecision::Render,
        (Requirement::AuthenticatedAny, None) => RouteDecision::RedirectToLogin,

        (Requirement::AuthenticatedRole(_), None) => RouteDecision::RedirectToLogin,
        (Requirement::AuthenticatedRole(role), Some(user)) if user.role != role => {
            RouteDecision::RedirectToHome(user.role)
        }
        (Requirement::AuthenticatedRole(_), Some(_)) => RouteDecision::Render,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
