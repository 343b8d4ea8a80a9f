//! Route guard.
//!
//! Decides, for every navigation, whether the requested path may be shown for
//! the current session or where to send the user instead.

use super::{Access, RouteTable, DEFAULT_PROTECTED_PATH, LOGIN_PATH};
use crate::models::Session;

/// Outcome of a navigation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(String),
}

impl Decision {
    fn redirect(path: &str) -> Self {
        Self::RedirectTo(path.to_string())
    }
}

/// Gates navigation on session state.
///
/// Unknown paths are allowed; the guard only restricts routes the table marks
/// as protected (or the login view).
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    table: RouteTable,
}

impl RouteGuard {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decide whether `requested_path` may be displayed for `session`.
    ///
    /// Aliases are resolved to their target first and always redirect, even
    /// when the target itself would be allowed.
    pub fn authorize(&self, requested_path: &str, session: &Session) -> Decision {
        let Some(resolved) = self.table.resolve(requested_path) else {
            return Decision::Allow;
        };

        match resolved.access {
            Access::Alias(target) => match self.authorize(target, session) {
                Decision::Allow => Decision::redirect(target),
                redirect => redirect,
            },
            Access::Login if session.is_authenticated() => {
                Decision::redirect(DEFAULT_PROTECTED_PATH)
            }
            Access::Protected if !session.is_authenticated() => Decision::redirect(LOGIN_PATH),
            _ => Decision::Allow,
        }
    }
}

/// [`RouteGuard::authorize`] against the default route table.
pub fn authorize(requested_path: &str, session: &Session) -> Decision {
    RouteGuard::default().authorize(requested_path, session)
}
