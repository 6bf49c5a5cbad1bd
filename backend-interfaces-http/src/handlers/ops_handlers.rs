use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use backend_application::AppState;
use backend_domain::utils::{current_unix_secs, unix_to_rfc3339};

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    pub accounts_file: bool,
    pub inventory_file: bool,
}

/// Liveness payload: no state mutation, just storage-presence flags.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Shoal Monitor API is running".to_string(),
        timestamp: unix_to_rfc3339(current_unix_secs()),
        accounts_file: state.account_repo.exists().await,
        inventory_file: state.inventory_repo.exists().await,
    })
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload)
}

#[derive(Serialize)]
struct UnknownEndpointBody {
    success: bool,
    message: String,
}

pub async fn unknown_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(UnknownEndpointBody {
            success: false,
            message: "Unknown endpoint. Valid operations: update, accounts, inventory, stats, \
                      health"
                .to_string(),
        }),
    )
}
