use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Deserializer};
use strum::{Display, EnumIter, EnumString};
use url::Url;

/// Deployment the client points at
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    /// Built-in endpoint used when the config file does not override it
    pub fn default_endpoint(self) -> EnvironmentConfig {
        let host = match self {
            Self::Development => "http://localhost:8080",
            Self::Test => "http://test-api.example.com",
            Self::Production => "https://api.example.com",
        };

        EnvironmentConfig {
            host: Url::parse(host).expect("built-in host is a valid URL"),
            version: default_version(),
        }
    }
}

/// API transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Per-request timeout (e.g. "15s", "500ms")
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    /// Endpoint overrides keyed by environment name
    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            environments: BTreeMap::new(),
        }
    }
}

impl ApiConfig {
    /// Endpoint for `env`, preferring the configured override
    pub fn endpoint(&self, env: Environment) -> EnvironmentConfig {
        self.environments
            .get(env.to_string().as_str())
            .cloned()
            .unwrap_or_else(|| env.default_endpoint())
    }
}

/// Host and API version of one environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    pub host: Url,
    #[serde(default = "default_version")]
    pub version: String,
}

impl EnvironmentConfig {
    /// `{host}/api/{version}`
    ///
    /// # Errors
    ///
    /// Returns an error if the joined string is not a valid URL
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        let host = self.host.as_str().trim_end_matches('/');
        Url::parse(&format!("{host}/api/{}", self.version))
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(15)
}

fn default_version() -> String {
    "v1".to_string()
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    duration_str::parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid duration '{raw}': {e}")))
}
