//! The single error shape every failed API call collapses into.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message used when neither the server nor the transport said anything.
pub const FALLBACK_MESSAGE: &str = "Request failed";

/// Normalized error for a failed API call.
///
/// Non-2xx responses with a structured message, non-2xx responses with a
/// raw body, and transport-level failures all end up here; call sites only
/// ever see one human-readable message and never branch on the category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error for a non-2xx response, derived from its body.
    pub fn from_response_body(body: &str) -> Self {
        Self::new(normalize_message(
            server_message(body),
            non_empty(body),
            None,
        ))
    }

    /// Error for a transport-level failure, where no response exists.
    pub fn from_transport(message: &str) -> Self {
        Self::new(normalize_message(None, None, non_empty(message)))
    }

    /// Stub error for server-side rendering, where no HTTP calls happen.
    pub fn unavailable() -> Self {
        Self::new("not available on the server")
    }
}

/// Resolve the user-visible message in priority order: server-supplied
/// `message` field, then the raw response body, then the transport error,
/// then the literal fallback.
pub fn normalize_message(
    server_message: Option<String>,
    raw_body: Option<String>,
    transport: Option<String>,
) -> String {
    server_message
        .or(raw_body)
        .or(transport)
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned())
}

/// The `message` field of a structured error body, if the body is a JSON
/// object carrying one.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_owned)
}

/// `Some` only for text with visible content.
fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
