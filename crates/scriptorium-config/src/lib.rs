#![allow(clippy::must_use_candidate)]

pub mod api;
mod env;
mod loader;
pub mod session;
pub mod telemetry;

use serde::Deserialize;

pub use api::*;
pub use session::*;
pub use telemetry::*;

/// Top-level Scriptorium configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which API environment to talk to
    #[serde(default)]
    pub environment: Environment,
    /// API endpoints and transport settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Credential persistence and login entry point
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Endpoint of the selected environment
    pub fn endpoint(&self) -> EnvironmentConfig {
        self.api.endpoint(self.environment)
    }
}
