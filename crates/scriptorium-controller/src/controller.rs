use std::future::Future;
use std::sync::Arc;

use scriptorium_core::{ApiError, ErrorCode, format_for_display, lookup};
use tokio::sync::watch;

/// The one error a view is currently showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub has_error: bool,
    pub error: Option<ApiError>,
    /// Display text for `error`, empty when there is none
    pub message: String,
}

impl ErrorState {
    fn populated(error: ApiError, message: String) -> Self {
        Self {
            has_error: true,
            error: Some(error),
            message,
        }
    }
}

/// Owner of one error slot
///
/// Clones share the slot. A new error always replaces the previous one;
/// there is no queue.
#[derive(Clone)]
pub struct ErrorController {
    state: Arc<watch::Sender<ErrorState>>,
}

impl Default for ErrorController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ErrorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorController")
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl ErrorController {
    /// Create a controller with an empty slot
    pub fn new() -> Self {
        let (state, _) = watch::channel(ErrorState::default());
        Self { state: Arc::new(state) }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ErrorState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ErrorState> {
        self.state.subscribe()
    }

    /// Record a failure, replacing whatever was stored
    ///
    /// An [`ApiError`] anywhere in the error's chain is stored as-is; any
    /// other error is wrapped as `UNKNOWN_ERROR`. Returns the stored error.
    pub fn handle_error(&self, error: impl Into<anyhow::Error>) -> ApiError {
        let error = error.into();

        let api_error = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ApiError>())
            .cloned()
            .unwrap_or_else(|| wrap_unknown(&error));

        tracing::error!(
            code = %api_error.code(),
            kind = %api_error.kind(),
            path = api_error.path(),
            error = %api_error,
            "operation failed"
        );

        let message = format_for_display(&api_error);
        self.state.send_replace(ErrorState::populated(api_error.clone(), message));

        api_error
    }

    /// Empty the slot; observers are only notified if it was populated
    pub fn clear_error(&self) {
        self.state.send_if_modified(|state| {
            if *state == ErrorState::default() {
                return false;
            }

            *state = ErrorState::default();
            true
        });
    }

    /// Show a client-side error that never reached the network
    pub fn show_error(&self, message: impl Into<String>, code: ErrorCode) {
        let message = message.into();
        let error = ApiError::new(code, message.clone());

        tracing::debug!(code = %code, "showing local error");
        self.state.send_replace(ErrorState::populated(error, message));
    }

    /// [`show_error`](Self::show_error) with the generic code
    pub fn show_message(&self, message: impl Into<String>) {
        self.show_error(message, ErrorCode::UNKNOWN_ERROR);
    }

    #[allow(clippy::unused_self)]
    pub const fn is_business_error(&self, error: &ApiError) -> bool {
        scriptorium_core::is_business_error(error.code())
    }

    #[allow(clippy::unused_self)]
    pub const fn is_system_error(&self, error: &ApiError) -> bool {
        scriptorium_core::is_system_error(error.code())
    }

    #[allow(clippy::unused_self)]
    pub const fn is_auth_error(&self, error: &ApiError) -> bool {
        scriptorium_core::is_auth_error(error.code())
    }

    /// Run an operation, capturing its failure instead of returning it
    ///
    /// Clears the slot first. Yields `None` on failure, with the error
    /// stored in the slot.
    pub async fn execute<T, E, F>(&self, operation: F) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<anyhow::Error>,
    {
        self.execute_with(operation, |_| {}, |_| {}).await
    }

    /// [`execute`](Self::execute) with callbacks for either outcome
    ///
    /// Overlapping calls on one controller are not serialized: whichever
    /// finishes last decides what the slot holds.
    pub async fn execute_with<T, E, F, S, R>(&self, operation: F, on_success: S, on_error: R) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<anyhow::Error>,
        S: FnOnce(&T),
        R: FnOnce(&ApiError),
    {
        self.clear_error();

        match operation.await {
            Ok(result) => {
                on_success(&result);
                Some(result)
            }
            Err(e) => {
                let error = self.handle_error(e);
                on_error(&error);
                None
            }
        }
    }
}

fn wrap_unknown(error: &anyhow::Error) -> ApiError {
    let message = error.to_string();
    let message = if message.trim().is_empty() {
        lookup(ErrorCode::UNKNOWN_ERROR).to_owned()
    } else {
        message
    };

    ApiError::new(ErrorCode::UNKNOWN_ERROR, message).with_details(format!("{error:?}"))
}
