use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::http_helpers::{HttpMethod, HttpRequest, ResponseWriter};
use crate::middleware::MiddlewareUnit;

use super::PathPattern;

/// Error position for handler and middleware results.
///
/// User failures are never intercepted by the dispatcher; they travel
/// through this type to the host's own error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type HandlerResult = Result<(), BoxError>;

pub type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send>>;

/// A type-erased route handler: reads the request, writes the response.
pub type RouteHandlerFn =
    Arc<dyn Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> HandlerFuture + Send + Sync>;

/// A committed (or in-progress) registration.
///
/// Every field except the middleware list is optional: a draft starts out
/// partial, and the dispatcher defensively re-checks completeness before
/// invoking anything. Committed routes are never mutated or removed.
#[derive(Clone)]
pub struct Route {
    pub(crate) method: Option<HttpMethod>,
    pub(crate) path: Option<String>,
    pub(crate) pattern: Option<PathPattern>,
    pub(crate) handler: Option<RouteHandlerFn>,
    pub(crate) middlewares: Vec<MiddlewareUnit>,
}

impl Route {
    pub(crate) fn draft(method: HttpMethod, path: &str, pattern: Option<PathPattern>) -> Self {
        Self {
            method: Some(method),
            path: Some(path.to_string()),
            pattern,
            handler: None,
            middlewares: Vec::new(),
        }
    }

    pub fn method(&self) -> Option<HttpMethod> {
        self.method
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Whether this route's pattern accepts `path` for the given method.
    pub(crate) fn accepts(&self, method: Option<HttpMethod>, path: &str) -> bool {
        self.method.is_some()
            && self.method == method
            && self.pattern.as_ref().is_some_and(|p| p.matches(path))
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("handler", &self.handler.as_ref().map(|_| "<handler>"))
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}
