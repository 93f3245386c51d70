//! HTTP middleware.

use axum::{
    body::Body,
    http::{header, Method, Request},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};
use tracing::{info, warn};

/// Timeout outermost, CORS inside it.
pub fn create_middleware_stack(
    timeout: Duration,
) -> tower::layer::util::Stack<CorsLayer, TimeoutLayer> {
    // Stack::new(inner, outer): the timeout wraps CORS
    tower::layer::util::Stack::new(create_cors_layer(), create_timeout_layer(timeout))
}

/// Pages are public and read-only; any origin may fetch them.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Stands in for the hosting platform's execution ceiling.
fn create_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::new(timeout)
}

/// Logs one line per request: warn for 4xx/5xx, info otherwise.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    // Capture before the request is moved into the inner service
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    // Run the rest of the stack (router and handler)
    let response = next.run(req).await;

    // Measure elapsed time and classify
    let duration = start.elapsed();
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}
