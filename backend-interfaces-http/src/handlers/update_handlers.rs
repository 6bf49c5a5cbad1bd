use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use backend_application::commands::update_commands;
use backend_application::AppState;
use backend_domain::UpdateSnapshot;

use crate::error::HttpError;

#[derive(Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
    pub username: String,
}

// Body is parsed by hand so malformed JSON lands in the same response
// envelope as application-level rejections.
pub async fn apply_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UpdateResponse>, HttpError> {
    let snapshot: UpdateSnapshot = serde_json::from_slice(&body).map_err(|err| {
        warn!("failed to parse update body: {}", err);
        HttpError::BadRequest(format!("Invalid update payload: {}", err))
    })?;

    let username = update_commands::apply_update(&state, snapshot).await?;
    Ok(Json(UpdateResponse {
        success: true,
        message: "Data updated".to_string(),
        username,
    }))
}
