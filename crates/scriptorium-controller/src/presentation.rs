//! What a stored error looks like to the user
//!
//! Severity and marker are derived from the error's code. Details are
//! opt-in, and retry is only offered for errors that can be retried; auth
//! failures redirect instead.

use std::fmt::Write as _;

use scriptorium_core::{ApiError, is_auth_error, is_business_error, is_system_error};
use strum::{AsRefStr, Display, EnumString};

/// How loudly an error is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

/// Presentation model for one error
#[derive(Debug, Clone)]
pub struct ErrorView<'a> {
    error: &'a ApiError,
    show_details: bool,
    retry: bool,
    close: bool,
    default_severity: Severity,
}

impl<'a> ErrorView<'a> {
    pub const fn new(error: &'a ApiError) -> Self {
        Self {
            error,
            show_details: false,
            retry: false,
            close: false,
            default_severity: Severity::Error,
        }
    }

    /// Include the error's details, when it has any
    #[must_use]
    pub const fn show_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }

    /// Ask for a retry action; dropped for errors that cannot be retried
    #[must_use]
    pub const fn with_retry(mut self, retry: bool) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub const fn with_close(mut self, close: bool) -> Self {
        self.close = close;
        self
    }

    /// Severity for codes outside every known range
    #[must_use]
    pub const fn default_severity(mut self, severity: Severity) -> Self {
        self.default_severity = severity;
        self
    }

    pub const fn severity(&self) -> Severity {
        let code = self.error.code();

        if is_system_error(code) {
            Severity::Error
        } else if is_auth_error(code) {
            Severity::Warning
        } else if is_business_error(code) {
            Severity::Info
        } else {
            self.default_severity
        }
    }

    pub const fn marker(&self) -> &'static str {
        let code = self.error.code();

        if is_system_error(code) {
            "!!"
        } else if is_auth_error(code) {
            "[auth]"
        } else if is_business_error(code) {
            "!"
        } else {
            "x"
        }
    }

    pub fn message(&self) -> &str {
        self.error.message()
    }

    /// Details to show, if toggled on and present
    pub fn details(&self) -> Option<&str> {
        self.error.details().filter(|_| self.show_details)
    }

    pub const fn offers_retry(&self) -> bool {
        self.retry && self.error.kind().allows_retry()
    }

    pub const fn offers_close(&self) -> bool {
        self.close
    }

    /// Plain-text rendering for terminals
    pub fn render(&self) -> String {
        let mut out = format!("{} {}: {}", self.marker(), self.severity(), self.message());

        if let Some(details) = self.details() {
            let _ = write!(out, "\n  {details}");
        }

        let _ = write!(out, "\n  code {} at {}", self.error.code(), self.error.timestamp());

        if let Some(path) = self.error.path() {
            let _ = write!(out, " ({path})");
        }

        let actions: Vec<&str> = [(self.offers_retry(), "[retry]"), (self.offers_close(), "[close]")]
            .into_iter()
            .filter_map(|(offered, label)| offered.then_some(label))
            .collect();

        if !actions.is_empty() {
            let _ = write!(out, "\n  {}", actions.join(" "));
        }

        out
    }
}
