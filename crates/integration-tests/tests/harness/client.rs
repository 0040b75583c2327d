//! Client wiring with observable credentials and navigation

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use scriptorium_client::{ApiClient, CredentialStore, MemoryCredentialStore, Navigator};
use url::Url;

/// Navigator that counts redirects instead of navigating
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: AtomicU32,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> u32 {
        self.redirects.load(Ordering::Relaxed)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::Relaxed);
    }
}

/// A client plus handles on its side-effect targets
pub struct TestClient {
    pub client: ApiClient,
    pub credentials: Arc<MemoryCredentialStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestClient {
    /// Client logged in with `token`, pointed at `base_url`
    pub fn new(base_url: &str, token: &str) -> Self {
        Self::with_timeout(base_url, token, Duration::from_secs(5))
    }

    pub fn with_timeout(base_url: &str, token: &str, timeout: Duration) -> Self {
        let credentials = Arc::new(MemoryCredentialStore::with_token(token));
        let navigator = Arc::new(RecordingNavigator::default());

        let client = ApiClient::builder(Url::parse(base_url).unwrap())
            .timeout(timeout)
            .credentials(Arc::clone(&credentials) as Arc<dyn CredentialStore>)
            .navigator(Arc::clone(&navigator) as Arc<dyn Navigator>)
            .build()
            .unwrap();

        Self {
            client,
            credentials,
            navigator,
        }
    }

    pub fn has_token(&self) -> bool {
        self.credentials.read_token().is_some()
    }
}
