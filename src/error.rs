// src/error.rs
//! Application error types with structured error handling.
//!
//! Fetch failures and transform failures are kept apart so a caller can tell
//! "the endpoint refused" from "the endpoint answered with something that is
//! not a page of records" from "the page was simply empty".

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// What part of the HTTP exchange broke when no response was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFailureKind {
    /// Could not connect to the endpoint
    Connect,
    /// The endpoint did not answer in time
    Timeout,
    /// The response body could not be read
    Body,
    /// The request could not be built or sent
    Request,
}

impl NetworkFailureKind {
    /// Classifies a reqwest error by the stage at which it failed.
    pub fn classify(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect
        } else if err.is_body() || err.is_decode() {
            Self::Body
        } else {
            Self::Request
        }
    }
}

impl fmt::Display for NetworkFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::Timeout => write!(f, "timeout"),
            Self::Body => write!(f, "body"),
            Self::Request => write!(f, "request"),
        }
    }
}

/// Failure to obtain a page body from the endpoint.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network failure ({kind}): {source}")]
    Network {
        kind: NetworkFailureKind,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status. `payload` is the
    /// response body as the endpoint sent it.
    #[error("Endpoint rejected the request ({status}): {payload}")]
    Rejected {
        status: reqwest::StatusCode,
        payload: Value,
    },

    #[error("Unreadable response body ({status}): {source}")]
    UnreadableBody {
        status: reqwest::StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Whether the endpoint answered, but with a non-success status.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The endpoint's error payload, when it sent one.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Rejected { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(source: reqwest::Error) -> Self {
        FetchError::Network {
            kind: NetworkFailureKind::classify(&source),
            source,
        }
    }
}

/// A fetched body that cannot be summarized as a page of records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Expected an array of records, got {found}")]
    NotASequence { found: &'static str },

    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to summarize page: {0}")]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Fetch(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejection_keeps_payload() {
        let err = FetchError::Rejected {
            status: reqwest::StatusCode::BAD_REQUEST,
            payload: json!({ "error": "bad color" }),
        };
        assert!(err.is_rejection());
        assert_eq!(err.payload(), Some(&json!({ "error": "bad color" })));
        assert_eq!(
            err.to_string(),
            r#"Endpoint rejected the request (400 Bad Request): {"error":"bad color"}"#
        );
    }

    #[test]
    fn test_transform_error_messages() {
        let err = TransformError::NotASequence { found: "object" };
        assert_eq!(err.to_string(), "Expected an array of records, got object");

        let app: AppError = err.into();
        assert_eq!(
            app.to_string(),
            "Failed to summarize page: Expected an array of records, got object"
        );
    }
}
