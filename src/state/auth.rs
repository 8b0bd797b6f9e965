#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Signed-in identity shared across the app.
///
/// Filled by the session guard after a successful check and cleared on
/// logout; provided as an `RwSignal` context from the root component.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// Email shown in the navbar, if signed in.
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}
