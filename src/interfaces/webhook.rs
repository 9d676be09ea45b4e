use axum::{Json, body::Bytes, http::StatusCode};
use serde_json::{Value, json};
use tracing::{debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::{
    domain::error::DomainError,
    flow::router::route,
    interfaces::render::render,
    protocol::normalize,
};

pub async fn webhook_handler(body: Bytes) -> (StatusCode, Json<Value>) {
    let request_id = Uuid::new_v4();
    let span = info_span!("webhook", %request_id);
    let _entered = span.enter();

    handle_body(&body)
}

/// Runs one event through normalize, route and render.
///
/// Expected failures are already rendered as 200 responses by the time they
/// get here; only a render fault becomes a 500.
pub(crate) fn handle_body(body: &[u8]) -> (StatusCode, Json<Value>) {
    let payload = match serde_json::from_slice::<Value>(body) {
        Ok(payload) => payload,
        Err(error) => {
            warn!("rejecting webhook body that is not json: {error}");
            return invalid_format();
        }
    };

    let interaction = normalize(payload);
    debug!(
        kind = interaction.kind.label(),
        command_id = interaction.kind.command_id(),
        action = interaction.kind.action_name(),
        dialog = interaction.is_dialog_flow,
        "normalized chat event"
    );

    let result = route(&interaction);
    info!(
        kind = interaction.kind.label(),
        outcome = result.label(),
        "chat event handled"
    );

    match render(&result, &interaction) {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(error) => {
            error!(
                outcome = result.label(),
                "failed to render chat response: {error:?}"
            );
            internal_error(&error)
        }
    }
}

fn invalid_format() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "text": "Invalid Chat event format" })),
    )
}

fn internal_error(error: &DomainError) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "text": format!("Error: {error}") })),
    )
}
