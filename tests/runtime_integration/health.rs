use serde_json::Value;

use super::support::spawn_server;

#[tokio::test]
async fn root_returns_static_greeting() {
    let server = spawn_server().await;

    let response = reqwest::get(server.url("/"))
        .await
        .expect("root endpoint should respond");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.expect("root should return text");
    assert_eq!(body, "Contact Manager chat app is running!");

    server.stop().await;
}

#[tokio::test]
async fn healthz_endpoint_returns_ok_payload() {
    let server = spawn_server().await;

    let response = reqwest::get(server.url("/healthz"))
        .await
        .expect("healthz endpoint should respond");

    assert!(response.status().is_success());

    let payload: Value = response.json().await.expect("healthz should return json");
    assert_eq!(payload["ok"], true);
    assert_eq!(payload["version"], "test");

    server.stop().await;
}
