use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::http_helpers::{HttpRequest, ResponseWriter};
use crate::router::{HandlerFuture, HandlerResult};

use super::Next;

/// A type-erased middleware function.
///
/// Receives the shared request, the response sink, the continuation, and
/// the unit's payload (`Value::Null` when no provider is attached).
pub type MiddlewareHandlerFn = Arc<
    dyn Fn(Arc<HttpRequest>, Arc<ResponseWriter>, Box<dyn Next>, Value) -> HandlerFuture
        + Send
        + Sync,
>;

/// Produces a middleware's payload from the request and response.
pub type PayloadFn = Arc<dyn Fn(&HttpRequest, &ResponseWriter) -> Value + Send + Sync>;

/// An immutable pairing of a middleware function and an optional
/// payload provider, attachable to any number of routes.
///
/// ```
/// use verso::register_middleware;
/// use serde_json::json;
///
/// let unit = register_middleware(|_req, _res, next, _payload| async move {
///     next.run().await
/// })
/// .set_payload(|req, _res| json!({ "path": req.path() }));
/// # let _ = unit;
/// ```
#[derive(Clone)]
pub struct MiddlewareUnit {
    handler: MiddlewareHandlerFn,
    payload: Option<PayloadFn>,
}

impl MiddlewareUnit {
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>, Box<dyn Next>, Value) -> Fut
            + Send
            + Sync
            + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self {
            handler: Arc::new(move |req, res, next, payload| {
                Box::pin(handler(req, res, next, payload))
            }),
            payload: None,
        }
    }

    /// Attach the payload provider. One-time, value-consuming, chainable.
    pub fn set_payload<P>(mut self, provider: P) -> Self
    where
        P: Fn(&HttpRequest, &ResponseWriter) -> Value + Send + Sync + 'static,
    {
        self.payload = Some(Arc::new(provider));
        self
    }

    /// Run the middleware: compute the payload (the `Value::Null` sentinel
    /// when no provider is attached) and invoke the handler with it.
    pub(crate) fn invoke(
        &self,
        req: Arc<HttpRequest>,
        res: Arc<ResponseWriter>,
        next: Box<dyn Next>,
    ) -> HandlerFuture {
        let payload = match &self.payload {
            Some(provider) => provider(&req, &res),
            None => Value::Null,
        };
        (self.handler)(req, res, next, payload)
    }
}

impl std::fmt::Debug for MiddlewareUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiddlewareUnit")
            .field("has_payload_provider", &self.payload.is_some())
            .finish()
    }
}

/// Wrap a middleware function in a [`MiddlewareUnit`].
pub fn register_middleware<F, Fut>(handler: F) -> MiddlewareUnit
where
    F: Fn(Arc<HttpRequest>, Arc<ResponseWriter>, Box<dyn Next>, Value) -> Fut
        + Send
        + Sync
        + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    MiddlewareUnit::new(handler)
}
