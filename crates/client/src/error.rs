//! Typed errors for the REST gateway.

use thiserror::Error;

/// Errors that can occur when talking to the commerce backend.
///
/// Local validation failures never reach this type; they are caught before a
/// request is built. Everything here is a remote or transport outcome.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Uniqueness violation (duplicate slug or SKU). Surfaced distinctly so
    /// the caller can prompt for a different value.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The referenced record no longer exists (stale id).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication failed or the token was rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other rejection from the backend.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the response envelope.
        message: String,
    },

    /// The response body did not match the expected envelope.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Whether this error should prompt the operator to change a field value
    /// rather than simply retry.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Conflict("slug already in use".to_string());
        assert_eq!(err.to_string(), "Conflict: slug already in use");
        assert!(err.is_conflict());

        let err = ApiError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (500): boom");
        assert!(!err.is_conflict());
    }
}
