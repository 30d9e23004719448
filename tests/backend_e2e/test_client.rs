//! E2E tests: backend client request/response and error mapping.

use loadtest_hub_lib::auth::BackendToken;
use loadtest_hub_lib::backend::BackendClient;
use loadtest_hub_lib::error::AppError;
use loadtest_hub_lib::models::Credentials;

use super::mock_backend::{MockBackend, ACCESS_TOKEN, PASSWORD, USERNAME};
use super::test_helpers::test_client;

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// (1) Valid credentials → access token.
#[actix_rt::test]
async fn test_login_returns_access_token() {
    let mock = MockBackend::start().await;
    let client = test_client(&mock);

    let login = client
        .login(&credentials(USERNAME, PASSWORD))
        .await
        .expect("login should succeed");

    assert_eq!(login.access_token, ACCESS_TOKEN);
    assert_eq!(login.token_type.as_deref(), Some("bearer"));
}

/// (2) Bad credentials → Unauthorized carrying the backend's message.
#[actix_rt::test]
async fn test_login_failure_maps_to_unauthorized() {
    let mock = MockBackend::start().await;
    let client = test_client(&mock);

    let err = client
        .login(&credentials(USERNAME, "wrong"))
        .await
        .expect_err("login should fail");

    match err {
        AppError::Unauthorized(message) => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected Unauthorized, got {:?}", other),
    }
}

/// (3) Stale token → Unauthorized on a read endpoint.
#[actix_rt::test]
async fn test_stale_token_is_unauthorized() {
    let mock = MockBackend::start().await;
    let client = test_client(&mock);
    let token = BackendToken::new("stale-token".to_string());

    let err = client
        .list_projects(&token)
        .await
        .expect_err("stale token should be rejected");

    assert!(matches!(err, AppError::Unauthorized(_)));
}

/// (4) Upstream 404 with a `detail` body → Upstream(404) with that message.
#[actix_rt::test]
async fn test_not_found_maps_to_upstream_status() {
    let mock = MockBackend::start().await;
    let client = test_client(&mock);
    let token = BackendToken::new(ACCESS_TOKEN.to_string());

    let err = client
        .get_run(&token, "no-such-run")
        .await
        .expect_err("unknown run should 404");

    match err {
        AppError::Upstream(status, message) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Run not found");
        }
        other => panic!("expected Upstream, got {:?}", other),
    }
}

/// (5) Unreachable backend → Backend transport error.
#[actix_rt::test]
async fn test_unreachable_backend_is_transport_error() {
    // Port 9 (discard) is almost certainly not listening.
    let client = BackendClient::with_base_url("http://127.0.0.1:9").expect("client builds");
    let token = BackendToken::new(ACCESS_TOKEN.to_string());

    let err = client
        .list_projects(&token)
        .await
        .expect_err("connection should fail");

    assert!(matches!(err, AppError::Backend(_)));
}

/// (6) Registration passes the backend's response through.
#[actix_rt::test]
async fn test_register_passthrough() {
    let mock = MockBackend::start().await;
    let client = test_client(&mock);

    let body = client
        .register(&credentials("new.user", "pw"))
        .await
        .expect("registration should succeed");
    assert_eq!(body["username"], "new.user");

    let err = client
        .register(&credentials("taken", "pw"))
        .await
        .expect_err("duplicate registration should fail");
    match err {
        AppError::Upstream(status, message) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Username already registered");
        }
        other => panic!("expected Upstream, got {:?}", other),
    }
}

/// (7) Release listing decodes typed models.
#[actix_rt::test]
async fn test_project_releases_decode() {
    let mock = MockBackend::start().await;
    let client = test_client(&mock);
    let token = BackendToken::new(ACCESS_TOKEN.to_string());

    let releases = client
        .project_releases(&token, "payment-gateway")
        .await
        .expect("releases should load");

    let ids: Vec<&str> = releases.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["rel-1-1", "rel-1-2"]);
    assert_eq!(releases[0].name, "Release 3.2.0");
}
