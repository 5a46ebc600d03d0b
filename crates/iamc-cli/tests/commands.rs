//! End-to-end runs of the `iamc` binary against a wiremock IAM service.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_session(file: &Path) {
    let credentials = json!({
        "MTAYLOR_IO_ID": "admin@x.io",
        "MTAYLOR_IO_SECRET_KEY": "secret",
        "MTAYLOR_IO_SESSION_ID": "s-1",
        "MTAYLOR_IO_SESSION_TOKEN": "tok-1",
    });
    std::fs::write(file, credentials.to_string()).unwrap();
}

async fn mount_refresh(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"sessionId": "s-1", "sessionToken": "tok-2"})),
        )
        .mount(server)
        .await;
}

/// Run `iamc --format json <args>` with an isolated home, config and store.
async fn iamc(server: &MockServer, home: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_iamc"));
    command
        .args(["--format", "json"])
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("IAMC_IAM__URL", server.uri())
        .env("IAMC_EVENTS__URL", server.uri())
        .env("IAMC_STORAGE__BACKEND", "file")
        .env("IAMC_STORAGE__PATH", home.join("credentials.json"))
        .env_remove("IAMC_LOG");
    tokio::task::spawn_blocking(move || command.output().unwrap())
        .await
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn commands_require_a_stored_session() {
    let server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    let output = iamc(&server, home.path(), &["users", "list"]).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("iamc error: not authenticated"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn group_with_blank_name_is_created_without_one() {
    let server = MockServer::start().await;
    mount_refresh(&server).await;
    Mock::given(method("POST"))
        .and(path("/groups"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g-9"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/groups/g-9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "g-9", "users": ["u-1"], "policies": []})),
        )
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    write_session(&home.path().join("credentials.json"));

    let output = iamc(&server, home.path(), &["groups", "create", "--name", "  "]).await;

    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["route"], "/groups/g-9");
    assert_eq!(body["users"][0]["id"], "u-1");
}

#[tokio::test(flavor = "multi_thread")]
async fn service_errors_render_inline() {
    let server = MockServer::start().await;
    mount_refresh(&server).await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "iam is down"})))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    write_session(&home.path().join("credentials.json"));

    let output = iamc(&server, home.path(), &["users", "list"]).await;

    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["error"], "iam is down");
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["route"], "/users");
}
