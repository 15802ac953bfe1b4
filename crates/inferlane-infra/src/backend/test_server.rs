//! In-process HTTP server standing in for remote providers in tests.

use std::sync::{Arc, Mutex};

use axum::Router;

/// A request the fake provider received.
#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

pub type CaptureLog = Arc<Mutex<Vec<Captured>>>;

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Record the parts of a request the backends are expected to set.
pub fn capture(
    log: &CaptureLog,
    uri: &axum::http::Uri,
    headers: &axum::http::HeaderMap,
    body: serde_json::Value,
) {
    let header = |name: axum::http::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    log.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        authorization: header(axum::http::header::AUTHORIZATION),
        content_type: header(axum::http::header::CONTENT_TYPE),
        body,
    });
}
