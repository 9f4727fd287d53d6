// ABOUTME: Handler for /healthz.
// ABOUTME: Always answers 200 with a fixed JSON body; method and body are ignored.

use axum::http::header;
use axum::response::IntoResponse;
use greeter_core::HealthStatus;

/// Health check handler. Returns 200 OK with `{"status": "OK"}`.
pub async fn healthz() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        HealthStatus::ok().body(),
    )
}
