//! Shared helpers for the end-to-end router tests.

use std::sync::Arc;

use verso::{Body, HttpRequest, RequestHandler, ResponseWriter};

/// Drive the rendered handler with one request and return the written
/// (status, body) pair. Panics if the dispatch future resolves `Err`;
/// tests that assert error propagation call the handler directly.
pub async fn send(handler: &RequestHandler, method: &str, uri: &str) -> (u16, Option<Body>) {
    let req = Arc::new(HttpRequest::new(method, uri));
    let res = Arc::new(ResponseWriter::new());
    handler(req, res.clone())
        .await
        .expect("dispatch future resolved Err");
    let response = res.snapshot();
    (response.status, response.body)
}

/// Extract the `message` field of a JSON failure body.
pub fn message(body: Option<Body>) -> String {
    match body {
        Some(Body::Json(value)) => value["message"].as_str().unwrap_or_default().to_string(),
        other => panic!("expected a JSON body, got {other:?}"),
    }
}
