#![allow(clippy::must_use_candidate)]

//! Error state for Scriptorium call sites
//!
//! [`ErrorController`] owns a single error slot that views observe, and
//! runs async operations so that failures land in that slot instead of
//! propagating. [`ErrorView`] turns a stored error into what gets shown.

mod controller;
pub mod presentation;

pub use controller::{ErrorController, ErrorState};
pub use presentation::{ErrorView, Severity};
