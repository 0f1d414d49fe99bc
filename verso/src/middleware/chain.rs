use async_trait::async_trait;
use std::sync::Arc;

use crate::http_helpers::{HttpRequest, ResponseWriter};
use crate::router::{HandlerResult, RouteHandlerFn};

/// The continuation handed to a middleware.
///
/// Calling `run` moves the chain forward one step. Whether that step
/// reaches the route handler depends on how the continuation was built:
/// the dispatcher hands a middleware a [`FinalHandler`] only when it is
/// the last unit in its chain, and an [`InertNext`] otherwise.
#[async_trait]
pub trait Next: Send + Sync {
    async fn run(self: Box<Self>) -> HandlerResult;
}

/// Continuation that invokes the route handler.
pub struct FinalHandler {
    handler: RouteHandlerFn,
    req: Arc<HttpRequest>,
    res: Arc<ResponseWriter>,
}

impl FinalHandler {
    pub fn new(handler: RouteHandlerFn, req: Arc<HttpRequest>, res: Arc<ResponseWriter>) -> Self {
        Self { handler, req, res }
    }
}

#[async_trait]
impl Next for FinalHandler {
    async fn run(self: Box<Self>) -> HandlerResult {
        (self.handler)(self.req, self.res).await
    }
}

/// Continuation for a middleware that is not the last in its chain:
/// running it is a no-op.
pub struct InertNext;

#[async_trait]
impl Next for InertNext {
    async fn run(self: Box<Self>) -> HandlerResult {
        Ok(())
    }
}
