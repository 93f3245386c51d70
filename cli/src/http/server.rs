//! HTTP server lifecycle.

use crate::http::{
    middleware::{create_middleware_stack, request_logger},
    routes::create_router,
    AppState,
};
use axum::{middleware, Router};
use launchpad_core::api::LaunchHandler;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8888,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Router plus middleware. Later `.layer` calls wrap earlier ones, so the
/// CORS/timeout stack sees the request first and the logger sees the final status.
pub fn build_app(handler: LaunchHandler, timeout: Duration) -> Router {
    create_router(AppState::new(handler))
        .layer(middleware::from_fn(request_logger))
        .layer(create_middleware_stack(timeout))
}

pub async fn start_server(
    config: ServerConfig,
    handler: LaunchHandler,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Build router with shared handler state
    let app = build_app(handler, config.timeout);

    // Resolve and bind; a bad host or busy port fails here, before serving
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{}", addr);

    // Serve until Ctrl+C or SIGTERM; in-flight requests finish first
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C signal");
                }
                _ = wait_for_sigterm() => {
                    info!("Received SIGTERM signal");
                }
            }

            info!("Starting graceful shutdown...");
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on SIGTERM. If the handler cannot be installed, never resolves,
/// leaving Ctrl+C as the only shutdown path.
#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}

/// No SIGTERM on Windows; Ctrl+C still ends the server.
#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
