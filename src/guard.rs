//! Navigation guard: decides whether a route transition may proceed.
//!
//! ARCHITECTURE
//! ============
//! `evaluate` is a pure function of the target route's metadata, its full
//! path and the session snapshot at that instant. The `RouteGuard` component
//! calls it on every location change and performs the redirect.
//!
//! A role requirement governs on its own when present: an unknown visitor
//! is sent to login, a known user with the wrong role to access-denied.
//! `requires_auth` is only consulted for routes without a role requirement.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{ACCESS_DENIED_PATH, LOGIN_PATH, RouteMeta};
use crate::state::session::AuthSnapshot;

/// Query parameter carrying the originally requested path to the login page.
pub const REDIRECT_PARAM: &str = "redirect";

/// Result of evaluating one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Allow,
    /// Unknown identity; go to login and come back to `redirect` afterwards.
    RedirectToLogin { redirect: String },
    /// Known identity without the required role.
    RedirectToAccessDenied,
}

impl NavigationOutcome {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Where the router should navigate instead, or `None` to proceed.
    #[must_use]
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin { redirect } => {
                Some(format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", urlencoding::encode(redirect)))
            }
            Self::RedirectToAccessDenied => Some(ACCESS_DENIED_PATH.to_owned()),
        }
    }
}

/// Decide the navigation to `full_path` governed by `meta`.
#[must_use]
pub fn evaluate(meta: &RouteMeta, full_path: &str, session: &AuthSnapshot) -> NavigationOutcome {
    let outcome = if let Some(roles) = meta.required_role {
        if !session.is_authenticated {
            NavigationOutcome::RedirectToLogin { redirect: full_path.to_owned() }
        } else if !roles.contains(&session.user_role.as_str()) {
            NavigationOutcome::RedirectToAccessDenied
        } else {
            NavigationOutcome::Allow
        }
    } else if meta.requires_auth && !session.is_authenticated {
        NavigationOutcome::RedirectToLogin { redirect: full_path.to_owned() }
    } else {
        NavigationOutcome::Allow
    };

    if !outcome.is_allowed() {
        log::debug!("navigation to {full_path} blocked: {outcome:?} (role={})", session.user_role);
    }
    outcome
}

/// Reassemble the full path (path, query and fragment) from router location
/// parts. `search` and `hash` are accepted with or without their leading
/// `?`/`#`.
#[must_use]
pub fn full_path(pathname: &str, search: &str, hash: &str) -> String {
    let mut out = pathname.to_owned();
    let search = search.strip_prefix('?').unwrap_or(search);
    if !search.is_empty() {
        out.push('?');
        out.push_str(search);
    }
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    if !hash.is_empty() {
        out.push('#');
        out.push_str(hash);
    }
    out
}
