use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;

use super::{Body, HttpResponse};

/// The response sink handed to handlers and middleware.
///
/// Handlers, middleware, and the continuation all see the same response
/// object, so the writer is shared as `Arc<ResponseWriter>` and mutates an
/// inner [`HttpResponse`] behind a lock. Setters are chainable:
///
/// ```
/// use verso::ResponseWriter;
/// use serde_json::json;
///
/// let res = ResponseWriter::new();
/// res.status(404).json(&json!({ "message": "Route not found" }));
/// assert_eq!(res.snapshot().status, 404);
/// ```
#[derive(Debug, Default)]
pub struct ResponseWriter {
    inner: Mutex<HttpResponse>,
}

impl ResponseWriter {
    /// Create a writer with the default response (status 200, no body).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response status code.
    pub fn status(&self, status: u16) -> &Self {
        self.inner.lock().status = status;
        self
    }

    /// Set a JSON body and the matching content type.
    ///
    /// A value that cannot be represented as JSON collapses to `null`.
    pub fn json<T: Serialize>(&self, value: &T) -> &Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        let mut inner = self.inner.lock();
        inner.body = Some(Body::Json(value));
        inner.headers.retain(|(name, _)| name != "Content-Type");
        inner
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self
    }

    /// Set a plain text body.
    pub fn text(&self, value: impl Into<String>) -> &Self {
        self.inner.lock().body = Some(Body::Text(value.into()));
        self
    }

    /// Append a response header.
    pub fn header(&self, name: impl Into<String>, value: impl Into<String>) -> &Self {
        self.inner.lock().headers.push((name.into(), value.into()));
        self
    }

    pub fn status_code(&self) -> u16 {
        self.inner.lock().status
    }

    /// A copy of the response as written so far.
    pub fn snapshot(&self) -> HttpResponse {
        self.inner.lock().clone()
    }

    /// Consume the writer, yielding the final response.
    pub fn into_response(self) -> HttpResponse {
        self.inner.into_inner()
    }
}
