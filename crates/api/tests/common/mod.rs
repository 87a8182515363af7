#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use arena_api::config::ServerConfig;
use arena_api::router::build_app_router;
use arena_api::services::PlayerService;
use arena_api::state::AppState;
use arena_db::repositories::MemoryPlayerRepo;
use arena_db::store::PlayerStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// A fresh in-memory store, shareable across several app instances.
pub fn memory_store() -> Arc<dyn PlayerStore> {
    Arc::new(MemoryPlayerRepo::new())
}

/// Build the full application router over `store`.
///
/// Goes through [`build_app_router`], so tests exercise the production
/// middleware stack.
pub fn build_test_app(store: Arc<dyn PlayerStore>) -> Router {
    let state = AppState {
        players: PlayerService::new(store),
    };
    build_app_router(state, &test_config())
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string()), true).await
}

/// POST a raw body labelled as JSON, for malformed-payload tests.
pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(raw), true).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header("content-type", "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}
