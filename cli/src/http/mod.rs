//! HTTP host for the launch handler.

pub mod middleware;
pub mod routes;
pub mod server;

use std::sync::Arc;

use launchpad_core::api::LaunchHandler;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<LaunchHandler>,
}

impl AppState {
    pub fn new(handler: LaunchHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}
