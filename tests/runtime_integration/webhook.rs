use serde_json::json;

use super::support::{spawn_server, spawn_server_with};

#[tokio::test]
async fn webhook_path_and_root_share_the_handler() {
    let server = spawn_server().await;
    let event = json!({
        "type": "MESSAGE",
        "message": { "slashCommand": { "commandId": 1 } }
    });

    let (root_status, root_payload) = server.post_event("/", &event).await;
    let (hook_status, hook_payload) = server.post_event("/webhook", &event).await;

    assert_eq!(root_status, reqwest::StatusCode::OK);
    assert_eq!(hook_status, reqwest::StatusCode::OK);
    assert_eq!(root_payload, hook_payload);
    assert_eq!(root_payload["cardsV2"][0]["cardId"], "contactManagerCard");

    server.stop().await;
}

#[tokio::test]
async fn non_json_body_is_a_bad_request() {
    let server = spawn_server().await;

    let response = reqwest::Client::new()
        .post(server.url("/"))
        .header("content-type", "text/plain")
        .body("not json")
        .send()
        .await
        .expect("webhook request should return");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let payload: serde_json::Value = response.json().await.expect("error should be json");
    assert_eq!(payload["text"], "Invalid Chat event format");

    server.stop().await;
}

#[tokio::test]
async fn unrecognized_event_gets_default_prompt() {
    let server = spawn_server().await;

    let (status, payload) = server
        .post_event("/", &json!({ "type": "ADDED_TO_SPACE" }))
        .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(payload["text"], "To add a contact, try `/addContact`");

    server.stop().await;
}

#[tokio::test]
async fn unknown_command_is_reported_with_200() {
    let server = spawn_server().await;

    let (status, payload) = server
        .post_event(
            "/",
            &json!({
                "type": "MESSAGE",
                "message": { "slashCommand": { "commandId": 42 } }
            }),
        )
        .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(payload["text"], "❌ Unknown command ID: 42");

    server.stop().await;
}

#[tokio::test]
async fn malformed_date_maps_to_500() {
    let server = spawn_server().await;

    let (status, payload) = server
        .post_event(
            "/",
            &json!({
                "commonEventObject": {
                    "invokedFunction": "openConfirmation",
                    "formInputs": {
                        "contactName": { "stringInputs": { "value": ["Ada"] } },
                        "contactBirthdate": { "dateInput": { "msSinceEpoch": "not-a-date" } }
                    }
                }
            }),
        )
        .await;

    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(payload["text"], "Error: malformed date value: not-a-date");

    server.stop().await;
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let server = spawn_server_with(|config| {
        config.max_body_bytes = 64;
    })
    .await;

    let response = reqwest::Client::new()
        .post(server.url("/"))
        .json(&json!({ "message": { "text": "x".repeat(256) } }))
        .send()
        .await
        .expect("webhook request should return");

    assert_eq!(response.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);

    server.stop().await;
}
