//! Failure taxonomy for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! `Unauthorized` outside an auth attempt is handled centrally by the API
//! client (token purge + redirect) and not re-surfaced to views. Every other
//! kind propagates to the calling view, which shows a transient notice.
//! Nothing here retries; the user re-triggers the action to retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Classified outcome of a failed API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure; no response was received.
    #[error("could not reach the server: {0}")]
    Network(String),
    /// The server rejected the session credential (401).
    #[error("session is not authorized")]
    Unauthorized,
    /// The server rejected the caller's role (403). Also raised by the admin
    /// endpoints for non-admin sessions; treated as a fail-closed signal.
    #[error("access denied")]
    Forbidden,
    /// The server rejected the request content (other 4xx), with the server's
    /// field-level message when one was provided.
    #[error("{0}")]
    Validation(String),
    /// The server failed (5xx).
    #[error("server error (status {0})")]
    Server(u16),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status, attaching the server's `error`
    /// message for validation failures when present. Callers only pass
    /// statuses of 400 and above.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            400..=499 => Self::Validation(
                message.unwrap_or_else(|| format!("request rejected (status {status})")),
            ),
            _ => Self::Server(status),
        }
    }

    /// Whether this error means the session credential was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
