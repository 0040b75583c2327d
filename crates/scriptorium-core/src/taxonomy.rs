use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric error code carried by API envelopes and normalized errors
///
/// Codes are partitioned into ranges that double as the classification
/// discriminant:
///
/// - `1`: success sentinel
/// - `[1000, 2000)`: generic and validation errors
/// - `[2000, 3000)`: authentication and authorization errors
/// - `[3000, 5000)`: domain errors, one sub-range per resource
/// - `[5000, 6000)`: system and infrastructure errors
///
/// A disjoint set of literal HTTP status values is used only as the
/// translation target for transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i64);

impl ErrorCode {
    /// Wrap a raw code, catalogued or not
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw numeric value
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this is the success sentinel
    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// Human-readable message, falling back to the unknown-error message
    pub fn message(self) -> &'static str {
        lookup(self)
    }

    /// Catalog name (e.g. `TOKEN_EXPIRED`) for known codes
    pub fn name(self) -> Option<&'static str> {
        entry(self).map(|e| e.name)
    }
}

impl From<i64> for ErrorCode {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<ErrorCode> for i64 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One row of the error catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: ErrorCode,
    pub name: &'static str,
    pub message: &'static str,
}

/// Declares the code constants and the message table from a single list so
/// a code can never exist without exactly one message
macro_rules! catalog {
    ($($(#[$attr:meta])* $name:ident = $value:literal => $message:literal,)*) => {
        impl ErrorCode {
            $(
                $(#[$attr])*
                pub const $name: Self = Self($value);
            )*
        }

        /// Every catalogued code with its name and message
        pub static CATALOG: &[CatalogEntry] = &[
            $(CatalogEntry { code: ErrorCode($value), name: stringify!($name), message: $message },)*
        ];
    };
}

catalog! {
    /// Envelope code for a successful call
    SUCCESS = 1 => "Operation succeeded",

    // -- Generic (1000-1999) --

    /// Fallback for anything unrecognized
    UNKNOWN_ERROR = 1000 => "Unknown error",
    INVALID_PARAMETER = 1001 => "Invalid parameter",
    MISSING_PARAMETER = 1002 => "Missing required parameter",
    INVALID_FORMAT = 1003 => "Invalid data format",
    DATA_NOT_FOUND = 1004 => "Data not found",
    OPERATION_FAILED = 1005 => "Operation failed",
    PERMISSION_DENIED = 1006 => "Permission denied",
    RESOURCE_EXISTS = 1007 => "Resource already exists",
    RESOURCE_NOT_FOUND = 1008 => "Resource not found",
    VALIDATION_FAILED = 1009 => "Data validation failed",

    // -- Authentication (2000-2999) --

    UNAUTHORIZED = 2000 => "Unauthorized access",
    TOKEN_EXPIRED = 2001 => "Access token expired",
    TOKEN_INVALID = 2002 => "Access token invalid",
    TOKEN_MISSING = 2003 => "Access token missing",
    INVALID_CREDENTIALS = 2004 => "Incorrect username or password",
    ACCOUNT_LOCKED = 2005 => "Account locked",
    ACCOUNT_DISABLED = 2006 => "Account disabled",
    INSUFFICIENT_PERMISSIONS = 2007 => "Insufficient permissions",

    // -- Projects (3000-3999) --

    PROJECT_NOT_FOUND = 3000 => "Project not found",
    PROJECT_ALREADY_EXISTS = 3001 => "Project name already exists",
    PROJECT_NAME_INVALID = 3002 => "Invalid project name",
    PROJECT_DESCRIPTION_TOO_LONG = 3003 => "Project description too long",
    PROJECT_STATUS_INVALID = 3004 => "Invalid project status",
    PROJECT_OPERATION_FAILED = 3005 => "Project operation failed",

    // -- System (5000-5999) --

    INTERNAL_SERVER_ERROR = 5000 => "Internal server error",
    DATABASE_ERROR = 5001 => "Database error",
    EXTERNAL_SERVICE_ERROR = 5002 => "External service call failed",
    /// No response was received at all
    NETWORK_ERROR = 5003 => "Network connection error",
    /// The client gave up waiting for a response
    TIMEOUT_ERROR = 5004 => "Request timed out",
    RATE_LIMIT_EXCEEDED = 5005 => "Rate limit exceeded",

    // -- HTTP status translation targets --

    HTTP_BAD_REQUEST = 400 => "Bad request",
    HTTP_UNAUTHORIZED = 401 => "Unauthorized access",
    HTTP_FORBIDDEN = 403 => "Access forbidden",
    HTTP_NOT_FOUND = 404 => "Resource not found",
    HTTP_METHOD_NOT_ALLOWED = 405 => "Method not allowed",
    HTTP_CONFLICT = 409 => "Resource conflict",
    HTTP_UNPROCESSABLE_ENTITY = 422 => "Unprocessable request data",
    HTTP_TOO_MANY_REQUESTS = 429 => "Too many requests",
    HTTP_INTERNAL_SERVER_ERROR = 500 => "Internal server error",
    HTTP_BAD_GATEWAY = 502 => "Bad gateway",
    HTTP_SERVICE_UNAVAILABLE = 503 => "Service unavailable",
    HTTP_GATEWAY_TIMEOUT = 504 => "Gateway timeout",
}

fn entry(code: ErrorCode) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.code == code)
}

/// Message for a code, or the unknown-error message if it is not catalogued
pub fn lookup(code: ErrorCode) -> &'static str {
    entry(code)
        .or_else(|| entry(ErrorCode::UNKNOWN_ERROR))
        .map_or("Unknown error", |e| e.message)
}
