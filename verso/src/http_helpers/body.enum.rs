use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Text(String),
    Json(Value),
}

impl Body {
    /// The textual content, if this is a text body.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(text) => Some(text),
            Body::Json(_) => None,
        }
    }

    /// The JSON content, if this is a JSON body.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Text(_) => None,
            Body::Json(value) => Some(value),
        }
    }
}
