//! Session lifecycle against a wiremock IAM service and a file store.

use iamc_auth::credentials::{ACCOUNT_KEY, SESSION_ID_KEY};
use iamc_auth::{CredentialStore, FileStore, SessionManager};
use iamc_client::IamClient;
use iamc_config::IamcConfig;
use iamc_core::enums::SessionState;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn iam(server: &MockServer) -> IamClient {
    let mut config = IamcConfig::default();
    config.iam.url = server.uri();
    IamClient::new(&config).unwrap()
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"sessionId": "s-1", "sessionToken": "tok-1"})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_then_restart_rehydrates_from_disk() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .and(header("x-session-id", "s-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"sessionId": "s-2", "sessionToken": "tok-2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("credentials.json");

    let mut first = SessionManager::new(iam(&server), FileStore::new(&file)).unwrap();
    first.login("admin@x.io", "secret").await.unwrap();
    assert_eq!(first.state(), SessionState::LoggedIn);
    drop(first);

    let mut second = SessionManager::new(iam(&server), FileStore::new(&file)).unwrap();
    assert_eq!(second.state(), SessionState::Rehydrating);

    let outcome = second.rehydrate().await.unwrap();
    assert_eq!(outcome.state, SessionState::LoggedIn);
    assert_eq!(
        second.store().get(SESSION_ID_KEY).unwrap().as_deref(),
        Some("s-2")
    );
    assert_eq!(
        second.store().get(ACCOUNT_KEY).unwrap().as_deref(),
        Some("admin@x.io")
    );
}

#[tokio::test]
async fn rejected_refresh_removes_the_file() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "expired"})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("credentials.json");

    let mut first = SessionManager::new(iam(&server), FileStore::new(&file)).unwrap();
    first.login("admin@x.io", "secret").await.unwrap();
    assert!(file.exists());

    let mut second = SessionManager::new(iam(&server), FileStore::new(&file)).unwrap();
    let outcome = second.rehydrate().await.unwrap();

    assert_eq!(outcome.state, SessionState::LoggedOut);
    assert_eq!(outcome.notice, None);
    assert!(!file.exists());
}

#[tokio::test]
async fn logout_calls_service_and_clears_file() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .and(header("x-session-id", "s-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("credentials.json");

    let mut session = SessionManager::new(iam(&server), FileStore::new(&file)).unwrap();
    session.login("admin@x.io", "secret").await.unwrap();
    session.logout().await.unwrap();

    assert_eq!(session.state(), SessionState::LoggedOut);
    assert!(!file.exists());
}
