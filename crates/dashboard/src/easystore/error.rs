//! Error types for the EasyStore API client.

use thiserror::Error;

/// Errors that can occur when interacting with the EasyStore API.
#[derive(Debug, Error)]
pub enum EasyStoreError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("EasyStore API error: {status} {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Status text or response body excerpt.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = EasyStoreError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "EasyStore API error: 401 Unauthorized");
    }

    #[test]
    fn test_parse_error_display() {
        let err = EasyStoreError::Parse("expected object".to_string());
        assert_eq!(err.to_string(), "parse error: expected object");
    }
}
