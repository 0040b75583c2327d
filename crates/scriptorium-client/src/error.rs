use scriptorium_core::ApiError;

/// Result of an API call: the payload or the normalized error
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors building an [`ApiClient`](crate::ApiClient)
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Base URL cannot serve as a prefix for API paths
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Underlying HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
