use std::future::Future;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tracing::info;

use crate::{application::state::SharedState, domain::error::DomainError, interfaces::webhook};

pub const ROOT_GREETING: &str = "Contact Manager chat app is running!";

pub fn build_router(state: SharedState) -> Router {
    let body_limit = state.config().max_body_bytes;

    Router::new()
        .route("/", get(root_handler).post(webhook::webhook_handler))
        .route("/webhook", post(webhook::webhook_handler))
        .route("/healthz", get(healthz_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

pub async fn serve(
    listener: TcpListener,
    state: SharedState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), DomainError> {
    let local_addr = listener.local_addr().map_err(|error| {
        DomainError::Unavailable(format!("failed to read listener address: {error}"))
    })?;

    info!(
        "cardflow listening on http://{}:{}, version={}",
        local_addr.ip(),
        local_addr.port(),
        state.config().runtime_version,
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|error| DomainError::Unavailable(format!("server runtime error: {error}")))
}

async fn root_handler() -> &'static str {
    ROOT_GREETING
}

async fn healthz_handler(State(state): State<SharedState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.health_payload()))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;
    info!("{method} {path} -> {}", response.status().as_u16());
    response
}
