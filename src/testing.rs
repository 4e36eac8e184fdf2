use std::{
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex},
};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};

use crate::{app::envy::Envy, router, AppState};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub authorization: Option<String>,
    pub use_cache: Option<String>,
    pub body: serde_json::Value,
}

/// Stand-in for the inference api. Answers with `image-<n>` bytes and
/// fails the call whose zero-based index equals `fail_on`.
#[derive(Clone, Default)]
pub struct MockUpstream {
    pub fail_on: Option<usize>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockUpstream {
    pub fn failing_on(index: usize) -> Self {
        Self {
            fail_on: Some(index),
            ..Default::default()
        }
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn infer(
    State(mock): State<MockUpstream>,
    Path(model): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let index = {
        let mut calls = mock.calls.lock().unwrap();
        calls.push(RecordedCall {
            model: model.trim_start_matches('/').to_string(),
            authorization: header("authorization"),
            use_cache: header("x-use-cache"),
            body: serde_json::from_slice(&body).unwrap_or_default(),
        });
        calls.len() - 1
    };

    if mock.fail_on == Some(index) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "Model is currently loading".to_string(),
        );
    }

    (StatusCode::OK, format!("image-{}", index))
}

fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });

    addr
}

pub fn spawn_upstream(mock: MockUpstream) -> String {
    let app = Router::new()
        .route("/models/*model", post(infer))
        .with_state(mock);

    format!("http://{}", serve(app))
}

/// An address nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

pub fn state_for(inference_url: &str) -> AppState {
    AppState::new(Envy {
        huggingface_api_key: Some("hf_test".to_string()),
        inference_url: Some(inference_url.to_string()),
        static_dir: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/frontend").to_string()),
        ..Default::default()
    })
}

pub fn spawn_app(state: AppState) -> String {
    format!("http://{}", serve(router(state)))
}
