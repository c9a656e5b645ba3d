//! Mock textbook backend shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// Records how many times each path was requested.
#[derive(Debug, Default)]
pub struct Backend {
    hits: Mutex<HashMap<String, usize>>,
}

impl Backend {
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    fn record(&self, path: &str) {
        *self.hits.lock().unwrap().entry(path.to_string()).or_insert(0) += 1;
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn chat(Json(body): Json<Value>) -> Response {
    match body["query"].as_str() {
        Some("fail") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some(query) => Json(json!({
            "response": format!("Answer to: {}", query),
            "sources": ["chapter-1"]
        }))
        .into_response(),
        None => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let q = params.get("q").cloned().unwrap_or_default();
    let limit: usize = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(5);
    let results: Vec<Value> = (0..limit.min(2))
        .map(|i| {
            json!({
                "id": i.to_string(),
                "title": format!("{} {}", q, i),
                "url": format!("/docs/{}", i),
                "excerpt": "...",
                "relevance": 1.0 - i as f64 * 0.1
            })
        })
        .collect();
    Json(json!({ "results": results }))
}

/// Serves preload targets. Requests lacking the preload marker header are
/// rejected so tests can observe that the fetcher sends it.
async fn preload_target(State(backend): State<Arc<Backend>>, uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path().to_string();
    backend.record(&path);

    let marked = headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        == Some("preload");
    if !marked {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match path.as_str() {
        "/api/v1/health" => "ok".into_response(),
        "/api/v1/chapters/" => r#"{"chapters":[],"total":0}"#.into_response(),
        "/api/v1/search/" => "{}".into_response(),
        "/api/v1/chat/" => StatusCode::METHOD_NOT_ALLOWED.into_response(),
        "/docs/slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "late".into_response()
        }
        "/docs/broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        p if p.starts_with("/docs/") => format!("page {}", p).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Starts the mock backend on an ephemeral port and returns its base URL.
pub async fn spawn_backend() -> (String, Arc<Backend>) {
    let backend = Arc::new(Backend::default());

    let app = Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route("/search", get(search))
        .fallback(preload_target)
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), backend)
}

/// Base URL of a port nothing listens on.
pub fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
