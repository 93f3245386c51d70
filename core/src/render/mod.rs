//! Fixed response documents.

mod pages;

pub use pages::{escape_html, Pages, Templates, BLOCKING_FAILURE_ERROR, BLOCKING_SUCCESS_BODY};
