use std::path::PathBuf;

use serde::Deserialize;

/// Credential persistence and login entry point
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// File holding the bearer token; defaults to `$HOME/.scriptorium/token`
    #[serde(default)]
    pub token_file: Option<PathBuf>,
    /// Path of the login page the user is sent to when the session expires
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_file: None,
            login_path: default_login_path(),
        }
    }
}

impl SessionConfig {
    /// Configured token file, or the default under the home directory
    pub fn token_path(&self) -> PathBuf {
        self.token_file.clone().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_default()
                .join(".scriptorium")
                .join("token")
        })
    }
}

fn default_login_path() -> String {
    "/login".to_string()
}
