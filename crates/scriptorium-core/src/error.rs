use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{ErrorCode, ErrorKind, classify, format_for_display, lookup};

/// Normalized error every failure origin is converted into
///
/// The timestamp records when the failure was surfaced, not when it
/// originally happened. Fields are read-only once the value is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{}", format_for_display(self))]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl ApiError {
    /// Build an error with an explicit message, stamped now
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            timestamp: Timestamp::now(),
            path: None,
        }
    }

    /// Build an error carrying the catalog message for `code`
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, lookup(code))
    }

    /// Attach details
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attach the request path the failure belongs to
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Category of this error's code
    pub const fn kind(&self) -> ErrorKind {
        classify(self.code)
    }
}
