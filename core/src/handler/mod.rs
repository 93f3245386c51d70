//! The launch attempt handler: one request in, one fixed document out.

mod request;

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::{AppConfig, LaunchConfig, LaunchPolicy, RoutesConfig};
use crate::errors::HandlerFault;
use crate::launch::{launcher_for, LaunchOutcome, LaunchSpec, Launcher};
use crate::render::{Pages, BLOCKING_SUCCESS_BODY};

pub use request::{
    FunctionRequest, FunctionResponse, CONTENT_TYPE_HTML, CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT,
};

#[derive(Clone)]
pub struct LaunchHandler {
    launch: LaunchConfig,
    routes: RoutesConfig,
    pages: Pages,
    launcher: Arc<dyn Launcher>,
}

impl LaunchHandler {
    pub fn new(cfg: &AppConfig) -> Self {
        Self::with_launcher(cfg, launcher_for(cfg.launch.policy))
    }

    pub fn with_launcher(cfg: &AppConfig, launcher: Arc<dyn Launcher>) -> Self {
        Self {
            launch: cfg.launch.clone(),
            routes: cfg.routes.clone(),
            pages: Pages::new(cfg.pages.clone()),
            launcher,
        }
    }

    pub fn policy(&self) -> LaunchPolicy {
        self.launcher.policy()
    }

    /// Handles one invocation. Never fails: every fault becomes a response.
    pub async fn handle(&self, req: &FunctionRequest) -> FunctionResponse {
        match self.is_launch_request(req) {
            Ok(true) => {
                let outcome = self.attempt_launch().await;
                self.render_outcome(&outcome).unwrap_or_else(|fault| {
                    error!(error.message = %fault, "failed to build launch response");
                    self.launch_fault(&fault)
                })
            }
            Ok(false) => {
                info!(path = ?req.path, method = ?req.http_method, "launch skipped");
                self.pages
                    .cannot_connect(None)
                    .map(|body| FunctionResponse::html(200, body))
                    .unwrap_or_else(|fault| self.fallback_fault(&fault))
            }
            Err(fault) => {
                warn!(error.message = %fault, "malformed request");
                self.fallback_fault(&fault)
            }
        }
    }

    /// Answers an event the adapter could not even decode, as the fallback
    /// branch would.
    pub fn reject(&self, fault: &HandlerFault) -> FunctionResponse {
        warn!(error.message = %fault, "rejecting undecodable event");
        self.fallback_fault(fault)
    }

    #[cfg(test)]
    fn with_pages(mut self, pages: Pages) -> Self {
        self.pages = pages;
        self
    }

    /// GET on the status path or the function's own route.
    fn is_launch_request(&self, req: &FunctionRequest) -> Result<bool, HandlerFault> {
        let path = req
            .path
            .as_deref()
            .ok_or(HandlerFault::MissingField("path"))?;
        let method = req
            .http_method
            .as_deref()
            .ok_or(HandlerFault::MissingField("httpMethod"))?;

        if !method.eq_ignore_ascii_case("GET") {
            return Ok(false);
        }

        let path = normalize_path(path);
        let function_route = format!("/.netlify/functions/{}", self.routes.function_name);
        Ok(path == normalize_path(&self.routes.status_path)
            || path == normalize_path(&function_route))
    }

    async fn attempt_launch(&self) -> LaunchOutcome {
        let spec = LaunchSpec::from_config(&self.launch, self.launcher.policy());
        info!(
            policy = self.launcher.policy().as_str(),
            command = %spec.display(),
            "launch attempted"
        );
        self.launcher.launch(&spec).await
    }

    fn render_outcome(&self, outcome: &LaunchOutcome) -> Result<FunctionResponse, HandlerFault> {
        let resp = match (outcome.mode(), outcome.error_message()) {
            (LaunchPolicy::Blocking, None) => FunctionResponse::html(200, BLOCKING_SUCCESS_BODY),
            (LaunchPolicy::Blocking, Some(_)) => {
                FunctionResponse::json(500, self.pages.blocking_failure()?)
            }
            (LaunchPolicy::Detached, None) => FunctionResponse::html(200, self.pages.redirect()?),
            (LaunchPolicy::Detached, Some(message)) => {
                FunctionResponse::html(500, self.pages.launch_error(message)?)
            }
        };
        Ok(resp)
    }

    fn launch_fault(&self, fault: &HandlerFault) -> FunctionResponse {
        let message = fault.to_string();
        match self.pages.launch_error(&message) {
            Ok(body) => FunctionResponse::html(500, body),
            Err(_) => FunctionResponse::new(500, CONTENT_TYPE_TEXT, message),
        }
    }

    fn fallback_fault(&self, fault: &HandlerFault) -> FunctionResponse {
        let message = fault.to_string();
        match self.pages.cannot_connect(Some(&message)) {
            Ok(body) => FunctionResponse::html(502, body),
            Err(_) => FunctionResponse::new(502, CONTENT_TYPE_TEXT, message),
        }
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
