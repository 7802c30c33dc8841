/*
[INPUT]:  Error sources (input validation, HTTP transport, API error bodies, serialization)
[OUTPUT]: Structured error types with per-field API error details
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ProfileType;

/// One field-level error reported by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiFieldError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub arguments: Vec<serde_json::Value>,
}

impl fmt::Display for ApiFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|arg| match arg {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{}: {}, path: {}, arguments: [{}]",
            self.code, self.message, self.path, arguments
        )
    }
}

/// Error body returned with non-success statuses:
/// `{"errors": [{"code", "message", "path", "arguments"}]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub errors: Vec<ApiFieldError>,
}

impl ApiError {
    /// Decode an error body, falling back to an empty error when it is not
    /// the documented shape.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "undecodable API error body");
            ApiError::default()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("no error details returned");
        }
        for (idx, err) in self.errors.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Main error type for the Transferwise adapter
#[derive(Error, Debug)]
pub enum TransferwiseError {
    /// Caller input rejected before any request was sent
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The API answered with a profile of the other kind
    #[error("Expected {expected} profile, but got {actual}")]
    ProfileTypeMismatch {
        expected: ProfileType,
        actual: ProfileType,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {error}")]
    Api { status: StatusCode, error: ApiError },

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Success status with a body that does not match the expected type
    #[error("Failed to decode response (status {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TransferwiseError {
    /// Check if the error was raised before any network call
    pub fn is_validation_error(&self) -> bool {
        matches!(self, TransferwiseError::Validation(_))
    }

    /// Structured API error details, if the API rejected the request
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            TransferwiseError::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// HTTP status of the response that caused the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransferwiseError::Api { status, .. } | TransferwiseError::Decode { status, .. } => {
                Some(*status)
            }
            TransferwiseError::Http(err) => err.status(),
            _ => None,
        }
    }
}

/// Result type alias for Transferwise operations
pub type Result<T> = std::result::Result<T, TransferwiseError>;
