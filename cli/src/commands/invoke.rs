//! Local debugging aid: feed one event JSON through the handler and print
//! the response JSON. Deployed functions use the `lambda` command instead.

use std::io::Read;

use launchpad_core::api::{AppConfig, CliError, FunctionRequest, HandlerFault, LaunchHandler};

use crate::commands::cli::InvokeArgs;

pub async fn handle_invoke(args: InvokeArgs, cfg: &AppConfig) -> Result<(), CliError> {
    let handler = LaunchHandler::new(cfg);

    // An undecodable event still gets a response, like any other fault.
    let resp = match read_event(args.event.as_deref(), &cfg.routes.status_path)? {
        Ok(req) => {
            tracing::debug!(path = ?req.path, method = ?req.http_method, "function event loaded");
            handler.handle(&req).await
        }
        Err(fault) => handler.reject(&fault),
    };

    let out = if args.pretty {
        serde_json::to_string_pretty(&resp)
    } else {
        serde_json::to_string(&resp)
    }
    .map_err(|e| CliError::Event(format!("failed to encode response: {e}")))?;

    println!("{out}");
    Ok(())
}

/// Outer error: the event could not be read. Inner error: it could not be decoded.
fn read_event(
    source: Option<&str>,
    status_path: &str,
) -> Result<Result<FunctionRequest, HandlerFault>, CliError> {
    match source {
        None => Ok(Ok(FunctionRequest::get(status_path))),
        Some("-") => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(parse_event(&s))
        }
        Some(path) => {
            let s = std::fs::read_to_string(path)?;
            Ok(parse_event(&s))
        }
    }
}

fn parse_event(s: &str) -> Result<FunctionRequest, HandlerFault> {
    serde_json::from_str(s).map_err(|e| HandlerFault::Malformed(e.to_string()))
}
