use rustc_hash::FxHashMap;

use super::Body;

/// The incoming request as the router sees it.
///
/// The transport that produced the request is out of scope here; the host
/// hands the router a descriptor carrying the method, the already-split
/// path, and whatever headers and body came with it.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub body: Option<Body>,
    pub headers: Vec<(String, String)>,
    pub method: String,
    pub path: String,
    pub query_params: FxHashMap<String, String>,
}

impl HttpRequest {
    /// Build a request from a method and a request URI.
    ///
    /// Everything after the first `?` is parsed as a query string; the
    /// remainder is the path the router matches on. A malformed query
    /// string yields an empty parameter map.
    pub fn new(method: impl Into<String>, uri: &str) -> Self {
        let (path, query) = match uri.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (uri, None),
        };

        let query_params = query
            .and_then(|q| serde_urlencoded::from_str::<FxHashMap<String, String>>(q).ok())
            .unwrap_or_default();

        Self {
            body: None,
            headers: Vec::new(),
            method: method.into(),
            path: path.to_string(),
            query_params,
        }
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get a specific header value by name (case-sensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(k, _)| k == name)
    }
}
