//! HTTP client, normalized errors, and wire types for the EduVault REST
//! backend.

pub mod api;
pub mod error;
pub mod types;
