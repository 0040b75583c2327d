//! Request/response interceptor pair
//!
//! The request phase attaches credentials. The response phase turns
//! whatever came back (success envelope, business failure envelope, HTTP
//! error, transport error) into a [`Verdict`]; only then is the session
//! side effect applied. Normalization itself is pure.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use scriptorium_core::{ApiError, Envelope, ErrorCode, code_from_http_status, is_auth_error, lookup};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::{CredentialStore, Navigator};

/// Details attached when the session has to be re-established
pub const LOGIN_AGAIN_DETAILS: &str = "Please log in again";

/// Details attached when no response was received
pub const NETWORK_DETAILS: &str = "Network connection failed, please check your network";

/// Details attached when the client gave up waiting
pub const TIMEOUT_DETAILS: &str = "The server did not respond in time";

/// Outcome of normalizing one response
#[derive(Debug)]
pub enum Verdict<T> {
    /// Success envelope; carries the payload
    Success(T),
    /// Any failure that does not invalidate the session
    Failure(ApiError),
    /// Authentication failure; the session must be expired
    SessionExpired(ApiError),
}

impl<T> Verdict<T> {
    /// The normalized error, if this is a failure of either kind
    pub const fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) | Self::SessionExpired(error) => Some(error),
        }
    }
}

/// Clears credentials and sends the user to the login page
#[derive(Clone)]
pub struct SessionGuard {
    credentials: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionGuard {
    pub fn new(credentials: Arc<dyn CredentialStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            credentials,
            navigator,
        }
    }

    /// Terminal redirect: clear the token, then navigate
    pub fn expire(&self) {
        self.credentials.clear_token();
        self.navigator.redirect_to_login();
    }
}

/// The single choke point every API call passes through
#[derive(Clone)]
pub struct Interceptor {
    credentials: Arc<dyn CredentialStore>,
    session: SessionGuard,
}

impl Interceptor {
    pub fn new(credentials: Arc<dyn CredentialStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session: SessionGuard::new(Arc::clone(&credentials), navigator),
            credentials,
        }
    }

    /// Request phase: attach the bearer token when one is stored
    pub fn on_request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials.read_token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret())),
            None => builder,
        }
    }

    /// Response phase: resolve into the payload or one normalized error
    ///
    /// `path` is the request path stamped onto every error.
    pub async fn on_response<T>(
        &self,
        path: &str,
        outcome: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let verdict = match outcome {
            Ok(response) => inspect_response(path, response).await,
            Err(e) => Verdict::Failure(normalize_transport(path, &e)),
        };

        self.settle(path, verdict)
    }

    /// Apply the side effect a verdict calls for and unwrap it
    pub fn settle<T>(&self, path: &str, verdict: Verdict<T>) -> Result<T, ApiError> {
        match verdict {
            Verdict::Success(payload) => Ok(payload),
            Verdict::Failure(error) => {
                tracing::warn!(path, code = %error.code(), error = %error, "request failed");
                Err(error)
            }
            Verdict::SessionExpired(error) => {
                tracing::warn!(path, code = %error.code(), "session expired, redirecting to login");
                self.session.expire();
                Err(error)
            }
        }
    }
}

async fn inspect_response<T>(path: &str, response: reqwest::Response) -> Verdict<T>
where
    T: DeserializeOwned,
{
    let status = response.status();

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return normalize_unread(path, status.as_u16(), normalize_transport(path, &e)),
    };

    if status.is_success() {
        normalize_envelope(path, &body)
    } else {
        normalize_status(path, status.as_u16(), &body)
    }
}

/// Normalize a body that arrived with a 2xx status
///
/// `code == 1` yields the payload; any other code is a business failure.
/// A body that is not an envelope, or whose payload does not match `T`,
/// becomes `UNKNOWN_ERROR`.
pub fn normalize_envelope<T>(path: &str, body: &[u8]) -> Verdict<T>
where
    T: DeserializeOwned,
{
    let envelope: Envelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            return Verdict::Failure(unexpected(path, format!("malformed response envelope: {e}")));
        }
    };

    if !envelope.is_success() {
        return Verdict::Failure(envelope.to_error().with_path(path));
    }

    let data = envelope.data.unwrap_or(serde_json::Value::Null);
    match serde_json::from_value(data) {
        Ok(payload) => Verdict::Success(payload),
        Err(e) => Verdict::Failure(unexpected(path, format!("unexpected response payload: {e}"))),
    }
}

/// Normalize a non-2xx response
///
/// Auth statuses short-circuit into [`Verdict::SessionExpired`]; all others
/// carry the body's message when it has one.
pub fn normalize_status<T>(path: &str, status: u16, body: &[u8]) -> Verdict<T> {
    let code = code_from_http_status(status);
    let message = body_message(body).unwrap_or_else(|| lookup(code).to_owned());

    if is_auth_error(code) {
        let error = ApiError::new(code, message)
            .with_details(LOGIN_AGAIN_DETAILS)
            .with_path(path);
        return Verdict::SessionExpired(error);
    }

    let error = ApiError::new(code, message)
        .with_details(format!("HTTP {status}"))
        .with_path(path);
    Verdict::Failure(error)
}

/// Normalize a response whose body could not be read
///
/// A non-2xx status still decides the outcome, so an auth status expires
/// the session even without a body. For 2xx, `read_error` is the failure.
pub fn normalize_unread<T>(path: &str, status: u16, read_error: ApiError) -> Verdict<T> {
    if (200..300).contains(&status) {
        return Verdict::Failure(read_error);
    }

    normalize_status(path, status, &[])
}

/// Normalize a failure where no usable response exists
pub fn normalize_transport(path: &str, error: &reqwest::Error) -> ApiError {
    if error.is_timeout() {
        return ApiError::from_code(ErrorCode::TIMEOUT_ERROR)
            .with_details(TIMEOUT_DETAILS)
            .with_path(path);
    }

    if error.is_connect() || (error.is_request() && error.status().is_none()) {
        return ApiError::from_code(ErrorCode::NETWORK_ERROR)
            .with_details(NETWORK_DETAILS)
            .with_path(path);
    }

    unexpected(path, error.to_string())
}

fn unexpected(path: &str, details: String) -> ApiError {
    ApiError::from_code(ErrorCode::UNKNOWN_ERROR)
        .with_details(details)
        .with_path(path)
}

/// Error message carried by a failure body, under `msg` or `message`
fn body_message(body: &[u8]) -> Option<String> {
    let json: serde_json::Value = serde_json::from_slice(body).ok()?;

    ["msg", "message"]
        .iter()
        .filter_map(|key| json.get(key).and_then(serde_json::Value::as_str))
        .find(|message| !message.is_empty())
        .map(str::to_owned)
}
