mod builder;
pub use builder::RouteDraft;

mod dispatcher;
pub use dispatcher::RequestHandler;

mod path_pattern;
pub use path_pattern::PathPattern;

mod registry;
pub use registry::Router;

mod route;
pub use route::{BoxError, HandlerFuture, HandlerResult, Route, RouteHandlerFn};
