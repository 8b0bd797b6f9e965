//! Session state derived from a single `/auth/me` query per mount.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::User;

/// Tri-state authentication status. Never cached across navigations; the
/// guard re-derives it on every mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// The check has not resolved yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Outcome of a session check: the status plus the identity on success.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionCheck {
    pub status: SessionStatus,
    pub user: Option<User>,
}

impl SessionCheck {
    /// Collapse any failure — expired session, network error, malformed
    /// response — into `Unauthenticated`.
    pub fn from_result(result: Result<User, ApiError>) -> Self {
        match result {
            Ok(user) => Self {
                status: SessionStatus::Authenticated,
                user: Some(user),
            },
            Err(_) => Self {
                status: SessionStatus::Unauthenticated,
                user: None,
            },
        }
    }
}
