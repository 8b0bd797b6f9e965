//! Shared client-side state modules.
//!
//! State is split by domain (`auth`, `session`, `toast`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod session;
pub mod toast;
