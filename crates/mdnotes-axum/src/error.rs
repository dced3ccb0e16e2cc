//! Axum-specific error types and mappings.
//!
//! Maps `OverlayError` to HTTP status codes. Bodies are plain text since
//! the clients are browsers, not API consumers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mdnotes_core::OverlayError;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// No root has an entry at the requested path.
    #[error("Could not find file {0:?}")]
    NotFound(String),

    /// Bad request (unparseable path).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The tree is read-only; only GET and HEAD are served.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(msg) => {
                // Details name concrete root paths; they stay in the log
                tracing::error!(error = %msg, "request failed");
                return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error\n")
                    .into_response();
            }
        };

        (status, format!("{self}\n")).into_response()
    }
}

impl From<OverlayError> for HttpError {
    fn from(err: OverlayError) -> Self {
        if err.is_bad_request() {
            Self::BadRequest(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn not_found_matches_plain_text_message() {
        let err = HttpError::NotFound("/a/b.md".to_string());
        assert_eq!(err.to_string(), r#"Could not find file "/a/b.md""#);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn overlay_errors_map_to_status() {
        let bad: HttpError = OverlayError::RelativePath("a".into()).into();
        assert!(matches!(bad, HttpError::BadRequest(_)));

        let nul: HttpError = OverlayError::NulByte("a\0.md".into()).into();
        assert!(matches!(nul, HttpError::BadRequest(_)));

        let io_err: HttpError = OverlayError::ListingRead {
            path: PathBuf::from("/r2/d"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        }
        .into();
        assert_eq!(
            io_err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
