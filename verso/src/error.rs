use thiserror::Error;

/// Routing failures the dispatcher converts into HTTP responses.
///
/// The `Display` strings are the exact `message` payloads on the wire.
/// Configuration variants (`DuplicateRoute`, `InvalidPattern`) are recorded
/// in the registry at registration time and surfaced as a 500 on every
/// subsequent dispatch; the dispatch variants are produced per request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// A registration whose (method, pattern) overlaps an already
    /// committed route.
    #[error("Duplicate route detected")]
    DuplicateRoute,

    /// Dispatch was attempted before any route was committed.
    #[error("No routes to handle")]
    NoRoutes,

    /// No committed route matched the request's method and path.
    #[error("Route not found")]
    RouteNotFound,

    /// The selected route is structurally incomplete (missing method,
    /// path, or handler).
    #[error("Invalid route configuration")]
    InvalidRoute,

    /// A path pattern the matcher could not compile.
    #[error("Invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
