use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::http_helpers::{HttpMethod, HttpRequest, ResponseWriter};
use crate::middleware::MiddlewareUnit;

use super::registry::Router;
use super::route::{HandlerResult, Route, RouteHandlerFn};

/// An owned, in-progress registration.
///
/// Each registration call produces its own draft; chained calls thread the
/// value through and [`create`](RouteDraft::create) commits it by moving
/// the route into the registry. Dropping a draft without committing
/// registers nothing.
#[must_use = "a route draft registers nothing until `create` commits it"]
pub struct RouteDraft {
    router: Router,
    route: Route,
}

impl RouteDraft {
    pub(crate) fn new(router: Router, route: Route) -> Self {
        Self { router, route }
    }

    /// Attach the route handler (method-first registration style).
    pub fn handler<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.route.handler = Some(erase_handler(handler));
        self
    }

    /// Append a middleware unit to the route's chain, preserving
    /// attachment order.
    pub fn apply_middleware(mut self, unit: MiddlewareUnit) -> Self {
        self.route.middlewares.push(unit);
        self
    }

    /// Append a middleware unit with a payload provider attached in the
    /// same call.
    pub fn apply_middleware_with<P>(self, unit: MiddlewareUnit, provider: P) -> Self
    where
        P: Fn(&HttpRequest, &ResponseWriter) -> Value + Send + Sync + 'static,
    {
        self.apply_middleware(unit.set_payload(provider))
    }

    /// Commit the draft onto the registry's route list.
    pub fn create(self) {
        self.router.commit(self.route);
    }
}

/// Method+handler registration style: the handler is attached immediately.
impl Router {
    pub fn get_with<F, Fut>(&self, path: &str, handler: F) -> RouteDraft
    where
        F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register_with(HttpMethod::GET, path, handler)
    }

    pub fn post_with<F, Fut>(&self, path: &str, handler: F) -> RouteDraft
    where
        F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register_with(HttpMethod::POST, path, handler)
    }

    pub fn put_with<F, Fut>(&self, path: &str, handler: F) -> RouteDraft
    where
        F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register_with(HttpMethod::PUT, path, handler)
    }

    pub fn patch_with<F, Fut>(&self, path: &str, handler: F) -> RouteDraft
    where
        F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register_with(HttpMethod::PATCH, path, handler)
    }

    pub fn delete_with<F, Fut>(&self, path: &str, handler: F) -> RouteDraft
    where
        F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register_with(HttpMethod::DELETE, path, handler)
    }

    pub fn register_with<F, Fut>(&self, method: HttpMethod, path: &str, handler: F) -> RouteDraft
    where
        F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register(method, path).handler(handler)
    }
}

fn erase_handler<F, Fut>(handler: F) -> RouteHandlerFn
where
    F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(move |req, res| Box::pin(handler(req, res)))
}
