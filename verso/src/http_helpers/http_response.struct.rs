use super::Body;

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<Body>,
    pub headers: Vec<(String, String)>,
}

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            status: 200,
            body: None,
            headers: vec![],
        }
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}
