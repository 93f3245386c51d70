use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Inbound function event. Only `path` and `http_method` are read.
///
/// Platforms send `null` for absent maps (`"queryStringParameters": null`),
/// so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRequest {
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub http_method: Option<String>,

    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,

    #[serde(default)]
    pub query_string_parameters: Option<BTreeMap<String, String>>,

    #[serde(default)]
    pub body: Option<String>,
}

impl FunctionRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            http_method: Some(method.into()),
            ..Self::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    pub fn new(status_code: u16, content_type: &str, body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), content_type.to_string());
        Self {
            status_code,
            headers,
            body: body.into(),
        }
    }

    pub fn html(status_code: u16, body: impl Into<String>) -> Self {
        Self::new(status_code, CONTENT_TYPE_HTML, body)
    }

    pub fn json(status_code: u16, body: impl Into<String>) -> Self {
        Self::new(status_code, CONTENT_TYPE_JSON, body)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("Content-Type").map(String::as_str)
    }
}
