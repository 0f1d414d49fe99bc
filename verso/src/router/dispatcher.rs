use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::error::RouterError;
use crate::http_helpers::{HttpMethod, HttpRequest, ResponseWriter};
use crate::middleware::{FinalHandler, InertNext, Next};

use super::registry::Router;
use super::route::{HandlerFuture, HandlerResult, Route, RouteHandlerFn};

/// The reusable per-request entry point produced by [`Router::render`].
pub type RequestHandler =
    Arc<dyn Fn(Arc<HttpRequest>, Arc<ResponseWriter>) -> HandlerFuture + Send + Sync>;

impl Router {
    /// Produce the request handler the host installs for every method and
    /// path.
    ///
    /// The closure holds a registry handle and re-reads the committed
    /// route list on each invocation, so routes committed after `render`
    /// was called are still dispatchable.
    ///
    /// Routing failures are always written to the response sink and the
    /// future resolves `Ok(())`; an `Err` comes only from a user handler
    /// or middleware, and propagates untouched for the host to deal with.
    pub fn render(&self) -> RequestHandler {
        let router = self.clone();
        Arc::new(move |req, res| {
            let router = router.clone();
            Box::pin(async move { router.dispatch(req, res).await })
        })
    }

    async fn dispatch(&self, req: Arc<HttpRequest>, res: Arc<ResponseWriter>) -> HandlerResult {
        // Everything needed from the registry is cloned out under the read
        // lock; no guard is held once a user future runs.
        let selected = {
            let inner = self.inner.read();

            if let Some(error) = &inner.error {
                res.status(500).json(&json!({ "message": error.to_string() }));
                return Ok(());
            }

            if inner.routes.is_empty() {
                res.status(500)
                    .json(&json!({ "message": RouterError::NoRoutes.to_string() }));
                return Ok(());
            }

            let method = HttpMethod::from_string(req.method());
            inner
                .routes
                .iter()
                .find(|route| route.accepts(method, req.path()))
                .cloned()
        };

        let Some(route) = selected else {
            debug!(method = req.method(), path = req.path(), "no route matched");
            res.status(404)
                .json(&json!({ "message": RouterError::RouteNotFound.to_string() }));
            return Ok(());
        };

        let handler = match (&route.method, &route.path, &route.handler) {
            (Some(_), Some(_), Some(handler)) => handler.clone(),
            _ => {
                res.status(404)
                    .json(&json!({ "message": RouterError::InvalidRoute.to_string() }));
                return Ok(());
            }
        };

        debug!(
            method = req.method(),
            path = req.path(),
            pattern = route.path().unwrap_or_default(),
            middlewares = route.middlewares.len(),
            "dispatching route"
        );

        if route.middlewares.is_empty() {
            return handler(req, res).await;
        }

        run_chain(&route, handler, req, res).await
    }
}

/// The chaining protocol.
///
/// The dispatcher drives only the unit at index 0 and returns its result
/// immediately; advancing past it is solely that unit's business, through
/// the continuation it was handed. The continuation reaches the route
/// handler exactly when the first unit is also the last one. With two or
/// more units attached, the continuation is inert and no later unit runs.
async fn run_chain(
    route: &Route,
    handler: RouteHandlerFn,
    req: Arc<HttpRequest>,
    res: Arc<ResponseWriter>,
) -> HandlerResult {
    let unit = route.middlewares[0].clone();

    let next: Box<dyn Next> = if route.middlewares.len() == 1 {
        Box::new(FinalHandler::new(handler, req.clone(), res.clone()))
    } else {
        Box::new(InertNext)
    };

    unit.invoke(req, res, next).await
}
