// Common test utilities and helpers
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

use portal_backend::{api, db::MemoryBackend, AppState, Config, Database};

pub struct TestApp {
    pub router: Router,
    pub backend: Arc<MemoryBackend>,
}

/// Build the full router over an in-memory store
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(MemoryBackend::new(), PathBuf::from("."))
}

pub fn setup_test_app_with(backend: MemoryBackend, static_dir: PathBuf) -> TestApp {
    let backend = Arc::new(backend);
    let state = Arc::new(AppState {
        db: Database::from_backend(backend.clone()),
    });
    let config = Config {
        static_dir,
        ..Config::default()
    };

    TestApp {
        router: api::router(state, &config),
        backend,
    }
}

impl TestApp {
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self.send_raw(request).await;
        let json = serde_json::from_slice(&bytes).expect("Response body is not JSON");
        (status, json)
    }

    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        (status, bytes.to_vec())
    }

    /// Current store contents as generic JSON
    pub fn stored(&self) -> serde_json::Value {
        let bytes = self.backend.contents().expect("Store was never written");
        serde_json::from_slice(&bytes).expect("Store is not valid JSON")
    }

    pub fn stored_len(&self, collection: &str) -> usize {
        self.backend
            .contents()
            .map(|_| self.stored()[collection].as_array().map_or(0, |a| a.len()))
            .unwrap_or(0)
    }
}
