//! Error types for listing client operations

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for listing client operations
pub type Result<T> = std::result::Result<T, ListingClientError>;

/// Errors that can occur while talking to the listing API or checking
/// its responses against the contract
#[derive(Error, Debug)]
pub enum ListingClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Identifier that cannot be sent as a single path segment
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The service answered with a status other than the one the contract requires
    #[error("Expected status {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },

    /// The response body does not match the documented shape
    #[error("Response does not match {schema} schema: {reason}")]
    SchemaViolation { schema: &'static str, reason: String },

    /// A field holds a different value than the one that was sent
    #[error("Field `{field}` mismatch: expected {expected}, got {actual}")]
    ValueMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
}

impl ListingClientError {
    /// Create a schema violation for the named schema
    pub fn schema_violation(schema: &'static str, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            schema,
            reason: reason.into(),
        }
    }

    /// Create a value mismatch from any displayable pair
    pub fn value_mismatch(
        field: &'static str,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::ValueMismatch {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Returns true if this is a contract status violation
    pub fn is_unexpected_status(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. })
    }

    /// Returns true if this is a structural schema violation
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::SchemaViolation { .. })
    }
}
