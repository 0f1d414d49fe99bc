//! Request router for serverless HTTP handlers.
//!
//! Routes are registered as (method, path-pattern) pairs mapped to async
//! handlers, optionally fronted by an ordered middleware chain. The host
//! installs the single closure produced by [`Router::render`] for every
//! method and path; the router performs method+path dispatch internally,
//! first registered match wins.
//!
//! ```
//! use std::sync::Arc;
//! use verso::{HttpRequest, ResponseWriter, Router};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let router = Router::new();
//! router
//!     .get_with("/ping", |_req, res| async move {
//!         res.text("pong");
//!         Ok(())
//!     })
//!     .create();
//!
//! let handler = router.render();
//! let req = Arc::new(HttpRequest::new("GET", "/ping"));
//! let res = Arc::new(ResponseWriter::new());
//! handler(req, res.clone()).await.unwrap();
//! assert_eq!(res.snapshot().status, 200);
//! # }
//! ```

pub mod error;
pub mod http_helpers;
pub mod middleware;
pub mod router;

pub use error::RouterError;
pub use http_helpers::{Body, HttpMethod, HttpRequest, HttpResponse, ResponseWriter};
pub use middleware::{register_middleware, MiddlewareUnit, Next};
pub use router::{
    BoxError, HandlerFuture, HandlerResult, PathPattern, RequestHandler, Route, RouteDraft,
    RouteHandlerFn, Router,
};

// Re-export dependencies that appear in handler signatures, so downstream
// code only needs to depend on this crate.
pub use async_trait::async_trait;
pub use rustc_hash::FxHashMap;
