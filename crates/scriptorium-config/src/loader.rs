use std::path::Path;

use strum::IntoEnumIterator;

use crate::{Config, Environment};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Load the file if it exists, otherwise use the built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file fails to load
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        tracing::debug!(config_path = %path.display(), "config file not found, using defaults");
        Ok(Self::default())
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint override names an unknown
    /// environment or is malformed, or transport settings are unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_api_config()?;
        self.validate_session_config()?;
        Ok(())
    }

    fn validate_api_config(&self) -> anyhow::Result<()> {
        if self.api.timeout.is_zero() {
            anyhow::bail!("api.timeout must be greater than 0");
        }

        for (name, endpoint) in &self.api.environments {
            if name.parse::<Environment>().is_err() {
                let known: Vec<_> = Environment::iter().map(|e| e.to_string()).collect();
                anyhow::bail!("unknown environment '{name}' (expected one of: {})", known.join(", "));
            }

            if endpoint.version.trim().is_empty() {
                anyhow::bail!("api.environments.{name}.version must not be empty");
            }

            if !matches!(endpoint.host.scheme(), "http" | "https") {
                anyhow::bail!("api.environments.{name}.host must be an http(s) URL");
            }

            endpoint
                .base_url()
                .map_err(|e| anyhow::anyhow!("invalid base URL for environment '{name}': {e}"))?;
        }

        Ok(())
    }

    fn validate_session_config(&self) -> anyhow::Result<()> {
        if !self.session.login_path.starts_with('/') {
            anyhow::bail!("session.login_path must start with '/'");
        }

        Ok(())
    }
}
