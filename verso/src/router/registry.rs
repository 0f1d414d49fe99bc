use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::error::RouterError;
use crate::http_helpers::HttpMethod;

use super::builder::RouteDraft;
use super::route::Route;
use super::PathPattern;

pub(crate) struct RegistryInner {
    pub(crate) routes: Vec<Route>,
    pub(crate) error: Option<RouterError>,
}

/// The route registry and registration surface.
///
/// A `Router` is an explicitly constructed value: build one at process
/// start, register every route, then hand [`Router::render`]'s closure to
/// the host as its catch-all request handler. The handle is cheap to clone
/// and internally shared, so the dispatcher always sees the current
/// committed route list.
///
/// Registration is expected to happen once, single-threaded, before any
/// request is dispatched. Committed routes are never reordered, mutated,
/// or removed, which is what makes concurrent dispatch reads safe.
///
/// A conflicting registration (a (method, path) pair some committed
/// route's pattern already matches) is detected eagerly but never raised
/// here: it is recorded in a sticky error slot that poisons every later
/// dispatch with a 500 until the process restarts. The same slot records
/// patterns that fail to compile.
#[derive(Clone)]
pub struct Router {
    pub(crate) inner: Arc<RwLock<RegistryInner>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                routes: Vec::new(),
                error: None,
            })),
        }
    }

    pub fn get(&self, path: &str) -> RouteDraft {
        self.register(HttpMethod::GET, path)
    }

    pub fn post(&self, path: &str) -> RouteDraft {
        self.register(HttpMethod::POST, path)
    }

    pub fn put(&self, path: &str) -> RouteDraft {
        self.register(HttpMethod::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RouteDraft {
        self.register(HttpMethod::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RouteDraft {
        self.register(HttpMethod::DELETE, path)
    }

    /// Begin a method-first registration: the draft carries no handler
    /// until [`RouteDraft::handler`] attaches one.
    pub fn register(&self, method: HttpMethod, path: &str) -> RouteDraft {
        let pattern = match PathPattern::compile(path) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!(method = method.as_str(), path, %err, "route pattern failed to compile");
                self.inner.write().error = Some(RouterError::InvalidPattern {
                    pattern: path.to_string(),
                    reason: err.to_string(),
                });
                None
            }
        };

        {
            let mut inner = self.inner.write();
            let duplicate = inner
                .routes
                .iter()
                .any(|route| route.accepts(Some(method), path));
            if duplicate {
                warn!(method = method.as_str(), path, "duplicate route detected");
                inner.error = Some(RouterError::DuplicateRoute);
            }
        }

        RouteDraft::new(self.clone(), Route::draft(method, path, pattern))
    }

    /// Number of committed routes.
    pub fn route_count(&self) -> usize {
        self.inner.read().routes.len()
    }

    /// The recorded registration conflict, if any. Sticky: there is no
    /// clear operation.
    pub fn registration_error(&self) -> Option<RouterError> {
        self.inner.read().error.clone()
    }

    pub(crate) fn commit(&self, route: Route) {
        self.inner.write().routes.push(route);
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
