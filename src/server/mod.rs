//! HTTP server module for API and WebSocket endpoints.
//!
//! Serves the fixture list over REST and the live feed over a WebSocket.

pub mod routes;
pub mod state;
pub mod ws;

use crate::server::routes::{fixtures, health};
use crate::server::state::AppState;
use crate::server::ws::ws_handler;

use axum::{routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    // Open CORS for the demo frontend. Not a production trust boundary.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root))
        .route("/fixtures", get(fixtures::list_fixtures))
        .route("/fixtures/:id", get(fixtures::get_fixture))
        .route("/ws/live", get(ws_handler))
        .layer(cors)
        .with_state(state)
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn run_server<F>(state: Arc<AppState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(state.config.bind_addr).await?;
    serve(listener, state, shutdown).await
}

/// Serves on an already bound listener.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!("HTTP server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixtureCatalog;
    use crate::config::ServerConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = Arc::new(AppState::new(
            Arc::new(FixtureCatalog::premier_league()),
            ServerConfig::default(),
        ));
        router(state)
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_root_status() {
        let (status, json) = get_json("/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"status": "ok", "service": "pl-live"}));
    }

    #[tokio::test]
    async fn test_list_fixtures() {
        let (status, json) = get_json("/fixtures").await;
        assert_eq!(status, StatusCode::OK);

        let fixtures = json.as_array().unwrap();
        assert_eq!(fixtures.len(), 3);

        let expected = [
            ("pl-001", "Manchester City", "Liverpool"),
            ("pl-002", "Arsenal", "Tottenham"),
            ("pl-003", "Chelsea", "Manchester United"),
        ];
        for (fixture, (id, home, away)) in fixtures.iter().zip(expected) {
            assert_eq!(fixture["id"], id);
            assert_eq!(fixture["home"], home);
            assert_eq!(fixture["away"], away);
            assert_eq!(fixture["venue"], "TBD");

            let kickoff = fixture["kickoff"].as_str().unwrap();
            assert!(chrono::DateTime::parse_from_rfc3339(kickoff).is_ok());
        }
    }

    #[tokio::test]
    async fn test_get_fixture() {
        let (status, json) = get_json("/fixtures/pl-003").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["home"], "Chelsea");
        assert_eq!(json["away"], "Manchester United");
    }

    #[tokio::test]
    async fn test_get_unknown_fixture() {
        let (status, json) = get_json("/fixtures/pl-404").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "fixture not found: pl-404");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/fixtures")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
