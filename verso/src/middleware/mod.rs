mod chain;
pub use chain::{FinalHandler, InertNext, Next};

mod unit;
pub use unit::{register_middleware, MiddlewareHandlerFn, MiddlewareUnit, PayloadFn};
