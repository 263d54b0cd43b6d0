//! Authenticated-user state shared via context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Current-user state. `loading` stays true until the first `/api/auth/me`
/// round trip resolves, so pages never redirect during SSR or hydration.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}
