//! HTTP server wiring for the Playgen API and player pages.
//!
//! The record store is injected as a trait object so tests run against a
//! fresh in-memory instance and production can swap in a durable backend
//! without touching the handlers.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use playgen_core::config::PlaygenConfig;
use playgen_core::store::{ConfigStore, MemoryConfigStore};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::handlers::{create_player_config, player_config_json, player_page};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Record store for generated player configurations
    pub store: Arc<dyn ConfigStore>,
}

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/player-config", post(create_player_config))
        .route("/api/player-config/{id}", get(player_config_json))
        .route("/player/{id}", get(player_page))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the application until shutdown.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails while
/// serving.
pub async fn run_server(config: PlaygenConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryConfigStore::new(
        config.deployment.clone(),
        config.assets.clone(),
    ));
    let state = AppState { store };
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Playgen server running on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn test_router() -> Router {
        let state = AppState {
            store: Arc::new(MemoryConfigStore::default()),
        };
        router(state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_full_record() {
        let app = test_router();
        let response = app
            .oneshot(post_json(
                "/api/player-config",
                json!({
                    "playerType": "plyr",
                    "provider": "yt",
                    "videoUrl": "https://youtu.be/abc123",
                    "autoplay": true,
                    "controls": true
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let record = body_json(response).await;
        assert_eq!(record["playerType"], "plyr");
        assert_eq!(record["videoUrl"], "https://youtu.be/abc123");
        assert!(record["iframeCode"]
            .as_str()
            .unwrap()
            .contains("data:text/html;base64,"));
        assert!(record["directLink"]
            .as_str()
            .unwrap()
            .contains("/player/"));
        assert!(record["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_player_type() {
        let app = test_router();
        let response = app
            .oneshot(post_json(
                "/api/player-config",
                json!({
                    "playerType": "realplayer",
                    "provider": "yt",
                    "videoUrl": "https://youtu.be/abc123"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid input");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_video_url() {
        let app = test_router();
        let response = app
            .oneshot(post_json(
                "/api/player-config",
                json!({
                    "playerType": "video",
                    "provider": "rand",
                    "videoUrl": ""
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["field"], "videoUrl");
    }

    #[tokio::test]
    async fn test_lookup_unknown_id_is_404() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/player-config/no-such-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_player_page_serves_decoded_html() {
        let app = test_router();
        let created = app
            .clone()
            .oneshot(post_json(
                "/api/player-config",
                json!({
                    "playerType": "jwpl",
                    "provider": "gdrive",
                    "videoUrl": "https://example.com/v.mp4"
                }),
            ))
            .await
            .unwrap();
        let record = body_json(created).await;
        let id = record["id"].as_str().unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/player/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("jwplayer("));
    }

    #[tokio::test]
    async fn test_player_page_malformed_snippet_is_500() {
        use async_trait::async_trait;
        use playgen_core::player::{PlayerConfig, PlayerRequest, PlayerType, Provider};
        use playgen_core::store::StoreError;

        // Store stub returning a record whose snippet lacks the data-URI
        // prefix, which the encoder can never produce.
        struct BrokenStore;

        #[async_trait]
        impl ConfigStore for BrokenStore {
            async fn create(&self, _request: PlayerRequest) -> Result<PlayerConfig, StoreError> {
                unimplemented!("not exercised")
            }

            async fn player_config(&self, id: &str) -> Option<PlayerConfig> {
                Some(PlayerConfig {
                    id: id.to_string(),
                    player_type: PlayerType::Html5Video,
                    provider: Provider::RandomSample,
                    video_url: "https://example.com/v.mp4".to_string(),
                    autoplay: false,
                    controls: true,
                    format: None,
                    iframe_code: "<iframe src=\"https://example.com\"></iframe>".to_string(),
                    direct_link: format!("http://localhost:5000/player/{id}"),
                    created_at: chrono::Utc::now(),
                })
            }
        }

        let app = router(AppState {
            store: Arc::new(BrokenStore),
        });
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/player/any-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_player_page_unknown_id_is_404() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/player/no-such-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!bytes.starts_with(b"<!DOCTYPE"));
    }
}
