//! JSON API handlers for player configuration records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use playgen_core::player::PlayerRequest;
use serde_json::json;
use tracing::error;

use crate::server::AppState;

/// Generates a new player configuration.
///
/// Validates the request body, renders and stores the record, and returns
/// it as JSON. Malformed or out-of-enum fields yield 400 with detail;
/// anything unexpected yields a generic 500.
pub async fn create_player_config(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let request: PlayerRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Invalid input",
                    "errors": [e.to_string()],
                })),
            )
                .into_response();
        }
    };

    if let Err(e) = request.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": "Invalid input",
                "errors": [{ "field": e.field, "message": e.message }],
            })),
        )
            .into_response();
    }

    match state.store.create(request).await {
        Ok(config) => Json(config).into_response(),
        Err(e) => {
            error!("player configuration creation failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response()
        }
    }
}

/// Returns a stored player configuration as JSON, or 404 when unknown.
pub async fn player_config_json(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.store.player_config(&id).await {
        Some(config) => Json(config).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Player configuration not found" })),
        )
            .into_response(),
    }
}
