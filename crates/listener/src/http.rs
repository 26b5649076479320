//! axum HTTP transport for [`WebhookReceiver`].
//!
//! | Route | Behaviour |
//! |-------|-----------|
//! | `POST <path>` | Body handed to [`WebhookReceiver::receive`] |
//! | `GET /health` | Always `200 OK` |
//!
//! Receive outcomes map to status codes as follows: accepted → `202`,
//! bad signature → `401`, bad payload → `400`, queue full or closed → `503`.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::{ReceiveError, Server, WebhookReceiver, HEALTH_PATH, SIGNATURE_HEADER};

/// Builds the router serving `receiver` at `path`.
pub fn router(receiver: WebhookReceiver, path: &str) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(path, post(receive_webhook))
        .with_state(Arc::new(receiver))
}

/// Binds `0.0.0.0:<port>` and serves `server`'s webhook route until
/// `shutdown` resolves.
pub async fn serve<F>(server: &Server, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], server.config().port));
    let app = router(server.receiver(), &server.config().path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, path = %server.config().path, "listening for webhooks");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn receive_webhook(
    State(receiver): State<Arc<WebhookReceiver>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());

    match receiver.receive(&body, signature) {
        Ok(event) => (
            StatusCode::ACCEPTED,
            Json(json!({ "status": "queued", "type": event.event_type() })),
        ),
        Err(err) => (
            status_for(&err),
            Json(json!({ "status": "rejected", "error": err.to_string() })),
        ),
    }
}

/// Maps a receive failure to the response status sent to the webhook sender.
pub fn status_for(err: &ReceiveError) -> StatusCode {
    match err {
        ReceiveError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ReceiveError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
        ReceiveError::Overloaded | ReceiveError::Closed => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
