use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};

/// Storage for the bearer token attached to outgoing requests
///
/// The pipeline only reads the token and clears it on session expiry;
/// storing is left to login flows.
pub trait CredentialStore: Send + Sync {
    /// Current token, if any
    fn read_token(&self) -> Option<SecretString>;

    /// Persist a new token
    fn store_token(&self, token: SecretString) -> io::Result<()>;

    /// Forget the token; a no-op when none is stored
    fn clear_token(&self);
}

/// Process-local token slot
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<SecretString>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SecretString::from(token.into()))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn read_token(&self) -> Option<SecretString> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn store_token(&self, token: SecretString) -> io::Result<()> {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token);
        Ok(())
    }

    fn clear_token(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// Token persisted in a file, one line, readable only by the owner
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn read_token(&self) -> Option<SecretString> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();

        if token.is_empty() {
            return None;
        }

        Some(SecretString::from(token.to_owned()))
    }

    fn store_token(&self, token: SecretString) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;

        // `mode` only applies on creation; tighten a file left by an older login
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(token.expose_secret().as_bytes())
    }

    fn clear_token(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "failed to remove token file");
            }
        }
    }
}
