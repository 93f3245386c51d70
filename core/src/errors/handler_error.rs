// core/src/errors/handler_error.rs
use thiserror::Error;

/// Faults raised while building a response, as opposed to launching the child.
#[derive(Debug, Error)]
pub enum HandlerFault {
    #[error("malformed request: {0}")]
    Malformed(String),

    #[error("request is missing required field: {0}")]
    MissingField(&'static str),

    #[error("failed to render page: {0}")]
    Render(String),

    #[error("failed to encode response body: {0}")]
    Encode(#[source] serde_json::Error),
}
