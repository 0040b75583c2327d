#![allow(clippy::must_use_candidate)]

//! Shared vocabulary of the Scriptorium API
//!
//! Holds the error taxonomy, the pure classifier over it, the normalized
//! `ApiError` shape and the response envelope every endpoint speaks

pub mod classify;
pub mod envelope;
mod error;
pub mod taxonomy;

pub use classify::{
    ErrorKind, classify, code_from_http_status, format_for_display, is_auth_error, is_business_error,
    is_system_error,
};
pub use envelope::{Envelope, Page};
pub use error::ApiError;
pub use taxonomy::{CATALOG, CatalogEntry, ErrorCode, lookup};
