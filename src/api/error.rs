//! Error types for scraping API calls.

use thiserror::Error;

/// Errors returned by scraping API operations.
///
/// The server does not get a say in how its failures are classified: any
/// non-success status maps to [`ApiError::RequestFailed`] regardless of
/// whether it is a client or server error, and the failure body is discarded.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or no response was received
    /// (DNS failure, connection refused, timeout).
    #[error("request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its status code indicates failure.
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },

    /// A success response carried a body that is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns the HTTP status code for a failed request, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_display() {
        let err = ApiError::RequestFailed { status: 404 };
        assert_eq!(err.to_string(), "request failed with status 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_decode_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ApiError = serde_err.into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.status().is_none());
    }
}
