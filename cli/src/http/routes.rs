//! Routes every request through the launch handler.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::Response,
    Router,
};
use launchpad_core::api::{FunctionRequest, FunctionResponse};

use crate::convert::{headers_to_map, map_to_headers};
use crate::http::AppState;

/// The function owns the whole path space, so everything is a fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new().fallback(function_handler).with_state(state)
}

async fn function_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let req = to_function_request(&method, &uri, &headers);
    let resp = state.handler.handle(&req).await;
    into_http_response(resp)
}

fn to_function_request(method: &Method, uri: &Uri, headers: &HeaderMap) -> FunctionRequest {
    // query and body are never read by the handler
    let mut req = FunctionRequest::new(method.as_str(), uri.path());
    req.headers = Some(headers_to_map(headers));
    req
}

fn into_http_response(resp: FunctionResponse) -> Response {
    let status = StatusCode::from_u16(resp.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let headers = map_to_headers(&resp.headers);
    let mut out = Response::new(Body::from(resp.body));
    *out.status_mut() = status;
    *out.headers_mut() = headers;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue, Request};
    use launchpad_core::api::{AppConfig, LaunchHandler, LaunchPolicy};
    use tower::ServiceExt;

    fn app(policy: LaunchPolicy, interpreter: &str) -> Router {
        let mut cfg = AppConfig::default();
        cfg.launch.policy = policy;
        cfg.launch.interpreter = interpreter.to_string();
        create_router(AppState::new(LaunchHandler::new(&cfg)))
    }

    async fn body_string(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn other_path_renders_cannot_connect() {
        let resp = app(LaunchPolicy::Detached, "launchpad-missing-python")
            .oneshot(get("/other-path?x=1"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert!(body_string(resp).await.contains("Unable to Connect"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn status_path_launches_dashboard() {
        let resp = app(LaunchPolicy::Blocking, "true")
            .oneshot(get("/status"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "Streamlit app is running");
    }

    #[tokio::test]
    async fn spawn_failure_maps_to_500() {
        let resp = app(LaunchPolicy::Detached, "launchpad-missing-python")
            .oneshot(get("/.netlify/functions/streamlit"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_string(resp).await.contains("launchpad-missing-python"));
    }

    #[tokio::test]
    async fn post_to_status_is_not_a_launch() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/status")
            .body(Body::empty())
            .unwrap();
        let resp = app(LaunchPolicy::Blocking, "launchpad-missing-python")
            .oneshot(req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_string(resp).await.contains("cannot connect"));
    }

    #[test]
    fn request_carries_path_method_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost"));
        let uri: Uri = "/status?a=b".parse().unwrap();
        let req = to_function_request(&Method::GET, &uri, &headers);
        assert_eq!(req.path.as_deref(), Some("/status"));
        assert_eq!(req.http_method.as_deref(), Some("GET"));
        assert_eq!(req.headers.unwrap()["host"], "localhost");
    }

    #[test]
    fn unknown_status_code_becomes_500() {
        let resp = into_http_response(FunctionResponse::html(1000, "x"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
