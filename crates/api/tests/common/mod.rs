#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use epictrack_api::config::{LogFormat, ServerConfig};
use epictrack_api::router::build_app_router;
use epictrack_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The pool is supplied directly, so the
/// database URL is never read.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a status and return the parsed JSON body.
pub async fn expect_json(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

/// Reference rows every project needs.
pub struct Refs {
    pub type_id: i64,
    pub sub_type_id: i64,
    pub proponent_id: i64,
}

/// Insert one type, sub-type and proponent directly.
pub async fn seed_refs(pool: &PgPool) -> Refs {
    let (type_id,): (i64,) =
        sqlx::query_as("INSERT INTO types (name) VALUES ('Energy - Electricity') RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();
    let (sub_type_id,): (i64,) = sqlx::query_as(
        "INSERT INTO sub_types (type_id, name, short_name)
         VALUES ($1, 'Hydroelectric', 'Hydro')
         RETURNING id",
    )
    .bind(type_id)
    .fetch_one(pool)
    .await
    .unwrap();
    let (proponent_id,): (i64,) =
        sqlx::query_as("INSERT INTO proponents (name) VALUES ('BC Hydro') RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();

    Refs {
        type_id,
        sub_type_id,
        proponent_id,
    }
}

/// Minimal valid create payload.
pub fn project_body(refs: &Refs, name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "latitude": "56.1950",
        "longitude": "-120.9130",
        "type_id": refs.type_id,
        "sub_type_id": refs.sub_type_id,
        "proponent_id": refs.proponent_id,
    })
}

/// Create a project through the API and return its id.
pub async fn create_project(pool: &PgPool, body: serde_json::Value) -> i64 {
    let app = build_test_app(pool.clone());
    let json = expect_json(
        post_json(app, "/api/v1/projects", body).await,
        StatusCode::CREATED,
    )
    .await;
    json["id"].as_i64().unwrap()
}
