//! Mock Scriptorium backend for integration tests
//!
//! Serves canned envelopes under `/api/v1`. The project id picks the
//! behavior: `missing` answers with a business failure, `expired` with a
//! 401, `broken` with a 500 and `slow` stalls before answering.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// How long `slow` requests stall
pub const SLOW_DELAY: Duration = Duration::from_millis(500);

/// Mock backend that answers predictably per project id
pub struct MockBackend {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<BackendState>,
}

#[derive(Default)]
struct BackendState {
    request_count: AtomicU32,
    authorized_count: AtomicU32,
}

impl MockBackend {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(BackendState::default());

        let app = Router::new()
            .route("/api/v1/projects", routing::get(handle_list_projects))
            .route("/api/v1/projects/{id}", routing::get(handle_get_project))
            .route("/api/v1/release/order/{id}/execute", routing::post(handle_execute))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL the client is configured with
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    /// Number of requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Number of requests that carried a bearer token
    pub fn authorized_count(&self) -> u32 {
        self.state.authorized_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn record(state: &BackendState, headers: &HeaderMap) {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer "));

    if bearer {
        state.authorized_count.fetch_add(1, Ordering::Relaxed);
    }
}

fn project(id: &str) -> serde_json::Value {
    json!({"id": id, "name": format!("Project {id}"), "desc": "", "status": 1})
}

async fn handle_list_projects(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    record(&state, &headers);

    Json(json!({
        "code": 1,
        "msg": "ok",
        "data": {"total": 2, "list": [project("1"), project("2")]}
    }))
    .into_response()
}

async fn handle_get_project(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    record(&state, &headers);

    match id.as_str() {
        "missing" => Json(json!({
            "code": 3000,
            "msg": "project missing does not exist",
            "data": null
        }))
        .into_response(),
        "expired" => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"code": 2001, "msg": "expired"})),
        )
            .into_response(),
        "broken" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "database unavailable"})),
        )
            .into_response(),
        "slow" => {
            tokio::time::sleep(SLOW_DELAY).await;
            Json(json!({"code": 1, "msg": "ok", "data": project("slow")})).into_response()
        }
        _ => Json(json!({"code": 1, "msg": "ok", "data": project(&id)})).into_response(),
    }
}

async fn handle_execute(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    record(&state, &headers);
    Json(json!({"code": 1, "msg": "ok"})).into_response()
}
