//! Runs the `roster` binary against the demo directory and a mock users API.

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::process::Output;

use serde_json::{Value, json};
use tokio::process::Command;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

async fn roster(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(args)
        .env_remove("ROSTER_API_URL")
        .env_remove("ROSTER_REQUEST_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("roster binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn user_json(id: u64, first: &str, last: &str) -> Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "email": format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg"),
    })
}

// =========================================================================
// Demo directory
// =========================================================================

#[tokio::test]
async fn test_mock_list_first_page() {
    let output = roster(&["--mock", "list"]).await;
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Janet Weaver"));
    assert!(!text.contains("Rachel Howell"));
    assert!(text.contains("Page 1 of 2 · 12 user(s)"));
}

#[tokio::test]
async fn test_mock_list_filters_loaded_page() {
    let output = roster(&["--mock", "list", "--page", "2", "--role", "editor"]).await;
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Tobias Funke"));
    assert!(text.contains("Alex Garcia"));
    assert!(!text.contains("Rachel Howell"));
    assert!(text.contains("Showing 2 of 6 on this page"));
}

#[tokio::test]
async fn test_mock_page_past_end_shows_last_page() {
    let output = roster(&["--mock", "list", "--page", "9"]).await;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Page 2 of 2"));
}

#[tokio::test]
async fn test_mock_delete_refreshes_page() {
    let output = roster(&["--mock", "delete", "9", "--page", "2"]).await;
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("User deleted successfully"));
    assert!(text.contains("Page 2 of 2 · 11 user(s)"));
}

#[tokio::test]
async fn test_mock_show_missing_user_fails_once() {
    let output = roster(&["--mock", "show", "999"]).await;
    assert!(!output.status.success());

    let text = stdout(&output);
    assert_eq!(text.matches("Error: User not found").count(), 1);
    assert!(text.contains("User 999 is not available"));
}

#[tokio::test]
async fn test_mock_create_rejects_invalid_form() {
    let output = roster(&[
        "--mock",
        "create",
        "--first-name",
        "A",
        "--last-name",
        "Lee",
        "--email",
        "not-an-email",
    ])
    .await;
    assert!(!output.status.success());

    let text = stdout(&output);
    assert!(text.contains("First name must be at least 2 characters"));
    assert!(text.contains("Please enter a valid email address"));
    assert!(!text.contains("User created successfully"));
}

#[tokio::test]
async fn test_mock_create_grows_directory() {
    let output = roster(&[
        "--mock",
        "create",
        "--first-name",
        "Ann",
        "--last-name",
        "Lee",
        "--email",
        "ann@example.com",
    ])
    .await;
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("User created successfully"));
    assert!(text.contains("Directory now holds 13 user(s)"));
}

#[tokio::test]
async fn test_mock_stats() {
    let output = roster(&["--mock", "stats"]).await;
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("12 user(s) in the directory"));
    assert!(text.contains("Administrator"));
    assert!(text.contains("Pending"));
}

#[tokio::test]
async fn test_update_without_fields_is_rejected() {
    let output = roster(&["--mock", "update", "3"]).await;
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Nothing to update"));
}

#[tokio::test]
async fn test_completions() {
    let output = roster(&["completions", "bash"]).await;
    assert!(output.status.success());
    assert!(stdout(&output).contains("roster"));
}

// =========================================================================
// Remote directory
// =========================================================================

#[tokio::test]
async fn test_remote_list_uses_api_url_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "per_page": 6,
            "total": 2,
            "total_pages": 1,
            "data": [user_json(1, "George", "Bluth"), user_json(2, "Janet", "Weaver")],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api_url = format!("{}/api", server.uri());
    let output = roster(&["--api-url", &api_url, "list"]).await;
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("janet.weaver@reqres.in"));
    assert!(text.contains("Page 1 of 1 · 2 user(s)"));
}

#[tokio::test]
async fn test_remote_update_sends_merged_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": user_json(2, "Janet", "Weaver") })),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/users/2"))
        .and(body_json(json!({
            "first_name": "Janet",
            "last_name": "Weaver",
            "email": "janet.weaver@reqres.in",
            "avatar": "https://reqres.in/img/faces/2-image.jpg",
            "role": "user",
            "status": "inactive",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "updatedAt": "2024-05-01T10:00:00Z" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1, "per_page": 6, "total": 1, "total_pages": 1,
            "data": [user_json(2, "Janet", "Weaver")],
        })))
        .mount(&server)
        .await;

    let api_url = format!("{}/api", server.uri());
    let output = roster(&["--api-url", &api_url, "update", "2", "--status", "inactive"]).await;
    assert!(output.status.success());
    assert!(stdout(&output).contains("User updated successfully"));
}

#[tokio::test]
async fn test_remote_failure_exits_non_zero_with_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "Database offline" })))
        .mount(&server)
        .await;

    let api_url = format!("{}/api", server.uri());
    let output = roster(&["--api-url", &api_url, "stats"]).await;
    assert!(!output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Error: Database offline"));
    assert!(text.contains("Could not load page 1: Database offline"));
}
