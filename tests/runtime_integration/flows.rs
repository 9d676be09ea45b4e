use serde_json::{Value, json};

use super::support::spawn_server;

fn echoed_parameters(submit_button: &Value) -> Value {
    submit_button["onClick"]["action"]["parameters"].clone()
}

#[tokio::test]
async fn contact_flow_carries_values_through_the_client() {
    let server = spawn_server().await;

    let (status, form) = server
        .post_event(
            "/",
            &json!({
                "type": "MESSAGE",
                "message": { "slashCommand": { "commandId": 2 } },
                "user": { "name": "users/ada" }
            }),
        )
        .await;
    assert_eq!(status, reqwest::StatusCode::OK);
    let widgets = &form["actionResponse"]["dialogAction"]["dialog"]["body"]["sections"][0]["widgets"];
    assert_eq!(widgets.as_array().map(Vec::len), Some(4));

    let (_, confirmation) = server
        .post_event(
            "/",
            &json!({
                "type": "CARD_CLICKED",
                "user": { "name": "users/ada" },
                "common": {
                    "invokedFunction": "openConfirmation",
                    "formInputs": {
                        "contactName": { "stringInputs": { "value": ["Ada Lovelace"] } },
                        "contactType": { "stringInputs": { "value": ["Personal"] } }
                    }
                }
            }),
        )
        .await;
    let buttons = &confirmation["cardsV2"][0]["card"]["sections"][0]["widgets"][3]["buttonList"]
        ["buttons"];
    let parameters = echoed_parameters(&buttons[1]);
    assert_eq!(
        parameters,
        json!([
            { "key": "contactName", "value": "Ada Lovelace" },
            { "key": "contactType", "value": "Personal" }
        ])
    );

    let (status, done) = server
        .post_event(
            "/",
            &json!({
                "type": "CARD_CLICKED",
                "user": { "name": "users/ada" },
                "action": { "actionMethodName": "submitForm", "parameters": parameters }
            }),
        )
        .await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(done["text"], "✅ Ada Lovelace has been added to your contacts.");
    assert_eq!(done["cardsV2"][0]["card"]["header"]["title"], "Success!");

    server.stop().await;
}

#[tokio::test]
async fn dialog_submit_without_parameters_keeps_dialog_open() {
    let server = spawn_server().await;

    let (status, payload) = server
        .post_event(
            "/",
            &json!({
                "type": "CARD_CLICKED",
                "isDialogEvent": true,
                "dialogEventType": "SUBMIT_DIALOG",
                "common": { "invokedFunction": "submitForm" }
            }),
        )
        .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    let status_block = &payload["actionResponse"]["dialogAction"]["actionStatus"];
    assert_eq!(status_block["statusCode"], "INVALID_ARGUMENT");
    assert_eq!(status_block["userFacingMessage"], "Please enter a contact name");

    server.stop().await;
}

#[tokio::test]
async fn inline_validation_failure_is_private() {
    let server = spawn_server().await;

    let (_, payload) = server
        .post_event(
            "/",
            &json!({
                "type": "CARD_CLICKED",
                "user": { "name": "users/grace" },
                "common": { "invokedFunction": "openConfirmation", "formInputs": {} }
            }),
        )
        .await;

    assert_eq!(payload["text"], "❌ Please enter a contact name");
    assert_eq!(payload["privateMessageViewer"]["name"], "users/grace");

    server.stop().await;
}

#[tokio::test]
async fn add_on_ticket_flow_submits_summary() {
    let server = spawn_server().await;

    let (_, form) = server
        .post_event(
            "/",
            &json!({
                "commonEventObject": { "hostApp": "CHAT" },
                "chat": {
                    "user": { "name": "users/eng" },
                    "appCommandPayload": {
                        "appCommandMetadata": { "appCommandId": 3, "appCommandType": "SLASH_COMMAND" },
                        "isDialogEvent": true,
                        "dialogEventType": "REQUESTED"
                    }
                }
            }),
        )
        .await;
    let section = &form["actionResponse"]["dialogAction"]["dialog"]["body"]["sections"][0];
    assert_eq!(section["header"], "🧾 Open Engineer Ticket");

    let (status, summary) = server
        .post_event(
            "/",
            &json!({
                "commonEventObject": {
                    "invokedFunction": "submitTicket()",
                    "formInputs": {
                        "title": { "stringInputs": { "value": ["Build broken"] } },
                        "issueDescription": { "stringInputs": { "value": ["main fails to link"] } },
                        "priority": { "stringInputs": { "value": ["Major"] } }
                    }
                },
                "chat": {
                    "user": { "name": "users/eng" },
                    "buttonClickedPayload": { "isDialogEvent": true, "dialogEventType": "SUBMIT_DIALOG" }
                }
            }),
        )
        .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(summary["cardsV2"][0]["card"]["header"]["title"], "🎟️ Ticket Summary");
    let text = summary["text"].as_str().expect("summary text");
    assert!(text.contains("Build broken"));
    assert!(text.contains("Major"));

    server.stop().await;
}

#[tokio::test]
async fn close_card_in_dialog_closes_it() {
    let server = spawn_server().await;

    let (_, payload) = server
        .post_event(
            "/",
            &json!({
                "type": "CARD_CLICKED",
                "isDialogEvent": true,
                "common": { "invokedFunction": "closeCard" }
            }),
        )
        .await;

    assert_eq!(
        payload["actionResponse"]["dialogAction"]["actionStatus"]["statusCode"],
        "OK"
    );

    server.stop().await;
}
