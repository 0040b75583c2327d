use serde::{Deserialize, Serialize};

use crate::{ApiError, ErrorCode};

/// Response body every endpoint returns: `{ code, msg, data }`
///
/// Success is signaled only by `code == 1`; any other code is a business
/// failure even on HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    pub code: ErrorCode,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
    /// Optional elaboration some endpoints attach to failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope wrapping `data`
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::SUCCESS,
            msg: ErrorCode::SUCCESS.message().to_owned(),
            data: Some(data),
            details: None,
        }
    }

    /// Failed envelope carrying `code` and `msg`
    pub fn failure(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
            details: None,
        }
    }

    pub const fn is_success(&self) -> bool {
        self.code.is_success()
    }

    /// Convert a failed envelope into the normalized error
    ///
    /// An empty `msg` falls back to the catalog message for the code.
    pub fn to_error(&self) -> ApiError {
        let error = if self.msg.is_empty() {
            ApiError::from_code(self.code)
        } else {
            ApiError::new(self.code, self.msg.clone())
        };

        match &self.details {
            Some(details) => error.with_details(details.clone()),
            None => error,
        }
    }
}

/// Paginated payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total: 0,
            list: Vec::new(),
        }
    }
}
