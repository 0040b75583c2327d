mod harness;

use std::time::Duration;

use harness::backend::MockBackend;
use harness::client::TestClient;
use scriptorium_client::interceptor::{LOGIN_AGAIN_DETAILS, NETWORK_DETAILS};
use scriptorium_client::{ErrorCode, ProjectListParams};

#[tokio::test]
async fn success_envelope_yields_payload_with_bearer_token() {
    let backend = MockBackend::start().await.unwrap();
    let test = TestClient::new(&backend.base_url(), "tok-1");

    let page = test.client.list_projects(&ProjectListParams::default()).await.unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.list[1].name, "Project 2");
    assert_eq!(backend.authorized_count(), 1);
}

#[tokio::test]
async fn business_failure_keeps_session() {
    let backend = MockBackend::start().await.unwrap();
    let test = TestClient::new(&backend.base_url(), "tok-1");

    let err = test.client.get_project("missing").await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::PROJECT_NOT_FOUND);
    assert_eq!(err.message(), "project missing does not exist");
    assert_eq!(err.path(), Some("/projects/missing"));
    assert!(test.has_token());
    assert_eq!(test.navigator.redirects(), 0);
}

#[tokio::test]
async fn unauthorized_clears_token_and_redirects_once() {
    let backend = MockBackend::start().await.unwrap();
    let test = TestClient::new(&backend.base_url(), "tok-1");

    let err = test.client.get_project("expired").await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::HTTP_UNAUTHORIZED);
    assert_eq!(err.message(), "expired");
    assert_eq!(err.details(), Some(LOGIN_AGAIN_DETAILS));
    assert!(!test.has_token());
    assert_eq!(test.navigator.redirects(), 1);

    // Next request goes out unauthenticated
    test.client.list_projects(&ProjectListParams::default()).await.unwrap();
    assert_eq!(backend.request_count(), 2);
    assert_eq!(backend.authorized_count(), 1);
}

#[tokio::test]
async fn server_error_carries_status_details() {
    let backend = MockBackend::start().await.unwrap();
    let test = TestClient::new(&backend.base_url(), "tok-1");

    let err = test.client.get_project("broken").await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::HTTP_INTERNAL_SERVER_ERROR);
    assert_eq!(err.message(), "database unavailable");
    assert_eq!(err.details(), Some("HTTP 500"));
    assert_eq!(err.to_string(), "database unavailable: HTTP 500");
    assert!(test.has_token());
}

#[tokio::test]
async fn slow_backend_times_out() {
    let backend = MockBackend::start().await.unwrap();
    let test = TestClient::with_timeout(&backend.base_url(), "tok-1", Duration::from_millis(100));

    let err = test.client.get_project("slow").await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::TIMEOUT_ERROR);
    assert_eq!(err.path(), Some("/projects/slow"));
    assert_eq!(test.navigator.redirects(), 0);
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let test = TestClient::new(&format!("http://{addr}/api/v1"), "tok-1");

    let err = test.client.get_project("1").await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::NETWORK_ERROR);
    assert_eq!(err.details(), Some(NETWORK_DETAILS));
    assert!(test.has_token());
}

#[tokio::test]
async fn execute_release_hits_single_api_prefix() {
    let backend = MockBackend::start().await.unwrap();
    let test = TestClient::new(&backend.base_url(), "tok-1");

    test.client.execute_release("12").await.unwrap();

    assert_eq!(backend.request_count(), 1);
}
