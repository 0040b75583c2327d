use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use scriptorium_core::{ApiError, ErrorCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ClientError, Result};
use crate::{CredentialStore, Interceptor, LogNavigator, MemoryCredentialStore, Navigator};

/// Timeout applied when the builder is not given one
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Typed client for the Scriptorium admin API
///
/// Cloning is cheap; clones share the connection pool and the interceptor.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    interceptor: Arc<Interceptor>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Start building a client rooted at `base_url` (e.g. `http://host/api/v1`)
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            credentials: None,
            navigator: None,
        }
    }

    /// Base URL every request path is resolved against
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET path`
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send(Method::GET, path, |builder| builder).await
    }

    /// `GET path?query`
    pub async fn get_with<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::GET, path, |builder| builder.query(query)).await
    }

    /// `POST path` with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, |builder| builder.json(body)).await
    }

    /// `POST path` without a body
    pub async fn post_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, |builder| builder).await
    }

    /// `PUT path` with a JSON body
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, |builder| builder.json(body)).await
    }

    /// `PATCH path` with a JSON body
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, path, |builder| builder.json(body)).await
    }

    /// `DELETE path`
    pub async fn delete<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send(Method::DELETE, path, |builder| builder).await
    }

    /// `DELETE path` with a JSON body
    pub async fn delete_with<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::DELETE, path, |builder| builder.json(body)).await
    }

    async fn send<T, F>(&self, method: Method, path: &str, prepare: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder,
    {
        let url = make_url(&self.base_url, path)?;

        tracing::debug!(%method, path, "sending request");

        let builder = self.interceptor.on_request(prepare(self.http.request(method, url)));
        let outcome = builder.send().await;

        self.interceptor.on_response(path, outcome).await
    }
}

/// Builder for [`ApiClient`]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    credentials: Option<Arc<dyn CredentialStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ApiClientBuilder {
    /// Per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Where the bearer token is read from and cleared on session expiry
    #[must_use]
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Where the user is sent when the session expires
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry paths or the HTTP
    /// client cannot be constructed
    pub fn build(self) -> std::result::Result<ApiClient, ClientError> {
        if self.base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(self.base_url.to_string()));
        }

        // Trailing slash so joined paths extend the prefix instead of replacing its last segment
        let mut base_url = self.base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new()));
        let navigator = self.navigator.unwrap_or_else(|| Arc::new(LogNavigator));

        Ok(ApiClient {
            base_url,
            http,
            interceptor: Arc::new(Interceptor::new(credentials, navigator)),
        })
    }
}

/// Resolve an API path against the base URL
fn make_url(base_url: &Url, path: &str) -> Result<Url> {
    base_url.join(path.trim_start_matches('/')).map_err(|e| {
        ApiError::from_code(ErrorCode::UNKNOWN_ERROR)
            .with_details(format!("invalid request path: {e}"))
            .with_path(path)
    })
}
