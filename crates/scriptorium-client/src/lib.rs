#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust HTTP client for the Scriptorium admin API
//!
//! Every call goes through the [`Interceptor`], so callers only ever see a
//! payload or a normalized [`ApiError`]

mod api;
mod client;
pub mod credentials;
pub mod error;
pub mod interceptor;
pub mod navigation;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder};
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{ClientError, Result};
pub use interceptor::{Interceptor, SessionGuard, Verdict};
pub use navigation::{LogNavigator, Navigator};
pub use scriptorium_core::{ApiError, ErrorCode, Page};
pub use types::*;
