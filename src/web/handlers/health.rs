//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::state::AppState;

/// Reports service liveness and store reachability.
///
/// # Endpoint
///
/// `GET /health`
///
/// Returns 200 with `{"status":"ok","store":true}` when the store answers a
/// PING, 503 with `"status":"degraded"` otherwise.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store_ok = state.store.health_check().await;

    let status = if store_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": if store_ok { "ok" } else { "degraded" },
        "store": store_ok,
    });

    (status, Json(body))
}
