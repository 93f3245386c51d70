//! Deployed entry point: polls the function runtime API for API Gateway
//! proxy events and answers each one through the launch handler.

use std::sync::Arc;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use lambda_runtime::{service_fn, LambdaEvent};
use launchpad_core::api::{AppConfig, CliError, FunctionRequest, FunctionResponse, LaunchHandler};

use crate::convert::{headers_to_map, map_to_headers};

pub async fn handle_lambda(cfg: &AppConfig) -> Result<(), CliError> {
    // Built once per cold start; every event reuses it.
    let handler = Arc::new(LaunchHandler::new(cfg));
    tracing::info!(policy = handler.policy().as_str(), "function runtime starting");

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| {
            let handler = Arc::clone(&handler);
            async move {
                Ok::<_, lambda_runtime::Error>(function_handler(&handler, event.payload).await)
            }
        },
    ))
    .await
    .map_err(|e| CliError::Runtime(e.to_string()))
}

/// Never fails: every outcome, including faults, is a proxy response.
pub async fn function_handler(
    handler: &LaunchHandler,
    event: ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    let req = to_function_request(&event);
    let resp = handler.handle(&req).await;
    into_proxy_response(resp)
}

fn to_function_request(event: &ApiGatewayProxyRequest) -> FunctionRequest {
    FunctionRequest {
        path: event.path.clone(),
        http_method: Some(event.http_method.as_str().to_string()),
        headers: Some(headers_to_map(&event.headers)),
        // never read by the handler
        query_string_parameters: None,
        body: event.body.clone(),
    }
}

fn into_proxy_response(resp: FunctionResponse) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: i64::from(resp.status_code),
        headers: map_to_headers(&resp.headers),
        body: Some(Body::Text(resp.body)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue, Method};

    fn event(method: Method, path: Option<&str>) -> ApiGatewayProxyRequest {
        let mut ev = ApiGatewayProxyRequest::default();
        ev.http_method = method;
        ev.path = path.map(str::to_string);
        ev.headers
            .insert(header::HOST, HeaderValue::from_static("example.netlify.app"));
        ev
    }

    fn handler(interpreter: &str) -> LaunchHandler {
        let mut cfg = AppConfig::default();
        cfg.launch.interpreter = interpreter.to_string();
        LaunchHandler::new(&cfg)
    }

    fn body_text(resp: &ApiGatewayProxyResponse) -> &str {
        match &resp.body {
            Some(Body::Text(s)) => s,
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_path_gets_cannot_connect_page() {
        let resp = function_handler(
            &handler("launchpad-missing-python"),
            event(Method::GET, Some("/other-path")),
        )
        .await;
        assert_eq!(resp.status_code, 200);
        assert_eq!(
            resp.headers.get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert!(body_text(&resp).contains("Unable to Connect"));
    }

    #[tokio::test]
    async fn status_path_with_failing_spawn_is_500() {
        let resp = function_handler(
            &handler("launchpad-missing-python"),
            event(Method::GET, Some("/.netlify/functions/streamlit")),
        )
        .await;
        assert_eq!(resp.status_code, 500);
        assert!(body_text(&resp).contains("launchpad-missing-python"));
    }

    #[tokio::test]
    async fn event_without_path_is_a_502() {
        let resp = function_handler(&handler("python"), event(Method::GET, None)).await;
        assert_eq!(resp.status_code, 502);
        assert!(body_text(&resp).contains("request is missing required field: path"));
    }

    #[test]
    fn event_maps_onto_function_request() {
        let req = to_function_request(&event(Method::POST, Some("/status")));
        assert_eq!(req.path.as_deref(), Some("/status"));
        assert_eq!(req.http_method.as_deref(), Some("POST"));
        assert_eq!(req.headers.unwrap()["host"], "example.netlify.app");
    }
}
