//! HTTP host command.

use std::time::Duration;

use launchpad_core::api::{AppConfig, CliError, LaunchHandler};

use crate::commands::cli::ServeArgs;
use crate::http::server::{start_server, ServerConfig};

pub async fn handle_serve(args: ServeArgs, cfg: &AppConfig) -> Result<(), CliError> {
    // CLI flags win over the config file
    let config = ServerConfig {
        host: args.host.unwrap_or_else(|| cfg.http_server.host.clone()),
        port: args.port.unwrap_or(cfg.http_server.port),
        timeout: Duration::from_secs(cfg.http_server.timeout_secs),
    };

    let handler = LaunchHandler::new(cfg);
    tracing::info!(policy = handler.policy().as_str(), "launch handler ready");

    start_server(config, handler)
        .await
        .map_err(|e| CliError::Server(e.to_string()))
}
