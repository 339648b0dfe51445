//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. [`crate::state::session::Session`] owns
//! the signal that wraps it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use qrwire::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State at mount, before the stored token has been checked.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Display name of the signed-in user, if any.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
