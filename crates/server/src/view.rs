//! Stand-in for the view-rendering collaborator: a handler resolves to a
//! named view plus a key-value model, serialized as
//! `{"view": <name>, "model": {...}}`. Redirects bypass this type entirely.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Map, Value};

pub struct View {
    name: &'static str,
    model: Map<String, Value>,
}

impl View {
    pub fn new(name: &'static str) -> Self {
        Self { name, model: Map::new() }
    }

    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.model.insert(key.to_string(), value);
        self
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        Json(json!({ "view": self.name, "model": self.model })).into_response()
    }
}
