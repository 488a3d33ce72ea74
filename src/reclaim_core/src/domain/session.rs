//! Explicit session snapshot for navigation decisions.
//!
//! The snapshot is passed in and evaluated once per decision instead of
//! being read ad hoc from persisted global storage inside effects. Actual
//! credential storage and enforcement live with external collaborators.

use crate::ports::navigator::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub authenticated: bool,
    pub admin: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user() -> Self {
        Self {
            authenticated: true,
            admin: false,
        }
    }

    pub fn admin() -> Self {
        Self {
            authenticated: true,
            admin: true,
        }
    }

    /// Whether this session may land on the given route. Callers redirect
    /// to `Route::Login` when it may not.
    pub fn allows(&self, route: &Route) -> bool {
        if route.requires_admin() {
            return self.admin;
        }
        if route.requires_auth() {
            return self.authenticated;
        }
        true
    }
}
