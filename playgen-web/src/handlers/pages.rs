//! Direct-link player page handler.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Response, StatusCode, header};
use playgen_core::embed;
use tracing::error;

use crate::server::AppState;

/// Serves the decoded player document for a stored record.
///
/// Looks up the record, extracts the base64 payload from its stored
/// iframe snippet, and returns the recovered HTML document. A snippet
/// without the expected data-URI shape is an internal-consistency
/// violation and reported generically as a 500.
pub async fn player_page(State(state): State<AppState>, Path(id): Path<String>) -> Response<Body> {
    let Some(config) = state.store.player_config(&id).await else {
        return plain_response(StatusCode::NOT_FOUND, "Player not found");
    };

    match embed::extract_document(&config.iframe_code) {
        Ok(document) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(document))
            .unwrap_or_else(|_| plain_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")),
        Err(e) => {
            error!(id = %id, "stored iframe snippet is malformed: {e}");
            plain_response(StatusCode::INTERNAL_SERVER_ERROR, "Invalid player configuration")
        }
    }
}

fn plain_response(status: StatusCode, body: &'static str) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
}
