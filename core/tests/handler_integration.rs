//! End-to-end tests for the launch handler against real child processes.
//!
//! `true` and `false` stand in for the Python interpreter: they ignore the
//! `-m streamlit run app.py` arguments and exit 0 / 1.
#![cfg(unix)]

use launchpad_core::api::{AppConfig, FunctionRequest, LaunchHandler, LaunchPolicy};
use pretty_assertions::assert_eq;

const MISSING_INTERPRETER: &str = "launchpad-missing-python";

fn handler(policy: LaunchPolicy, interpreter: &str) -> LaunchHandler {
    let mut cfg = AppConfig::default();
    cfg.launch.policy = policy;
    cfg.launch.interpreter = interpreter.to_string();
    LaunchHandler::new(&cfg)
}

#[tokio::test]
async fn blocking_launch_that_exits_cleanly_reports_running() {
    let resp = handler(LaunchPolicy::Blocking, "true")
        .handle(&FunctionRequest::get("/status"))
        .await;
    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.body, "Streamlit app is running");
}

#[tokio::test]
async fn blocking_launch_failures_return_json_error() {
    for interpreter in ["false", MISSING_INTERPRETER] {
        let resp = handler(LaunchPolicy::Blocking, interpreter)
            .handle(&FunctionRequest::get("/status"))
            .await;
        assert_eq!(resp.status_code, 500, "{interpreter}");
        assert_eq!(resp.content_type(), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Failed to start Streamlit app"}));
    }
}

#[tokio::test]
async fn detached_launch_redirects_to_app() {
    let resp = handler(LaunchPolicy::Detached, "true")
        .handle(&FunctionRequest::get("/status"))
        .await;
    assert_eq!(resp.status_code, 200);
    assert!(resp.content_type().unwrap().starts_with("text/html"));
    assert!(resp.body.contains(r#"meta http-equiv="refresh""#));
    assert!(resp.body.contains("Streamlit Cloud"));
}

#[tokio::test]
async fn detached_launch_of_failing_child_is_still_optimistic() {
    let resp = handler(LaunchPolicy::Detached, "false")
        .handle(&FunctionRequest::get("/status"))
        .await;
    assert_eq!(resp.status_code, 200);
}

#[tokio::test]
async fn detached_spawn_failure_echoes_error() {
    let resp = handler(LaunchPolicy::Detached, MISSING_INTERPRETER)
        .handle(&FunctionRequest::get("/status"))
        .await;
    assert_eq!(resp.status_code, 500);
    assert!(resp.body.contains("failed to spawn process"));
    assert!(resp.body.contains(MISSING_INTERPRETER));
}

#[tokio::test]
async fn other_paths_get_cannot_connect_page() {
    for policy in [LaunchPolicy::Blocking, LaunchPolicy::Detached] {
        // a missing interpreter proves no launch is attempted
        let resp = handler(policy, MISSING_INTERPRETER)
            .handle(&FunctionRequest::get("/other-path"))
            .await;
        assert_eq!(resp.status_code, 200);
        assert!(resp.body.contains("Unable to Connect"));
        assert!(resp.body.contains("cannot connect"));
        assert!(resp.body.contains("https://streamlit.io/cloud"));
        assert!(resp.body.contains("https://www.heroku.com"));
        assert!(resp.body.contains("https://render.com"));
    }
}

#[tokio::test]
async fn status_endpoint_responses_are_html_or_json() {
    let cases = [
        (LaunchPolicy::Blocking, "true"),
        (LaunchPolicy::Blocking, "false"),
        (LaunchPolicy::Detached, "true"),
        (LaunchPolicy::Detached, MISSING_INTERPRETER),
    ];
    for (policy, interpreter) in cases {
        let resp = handler(policy, interpreter)
            .handle(&FunctionRequest::get("/status"))
            .await;
        let ct = resp.content_type().unwrap();
        assert!(
            ct.starts_with("text/html") || ct == "application/json",
            "{policy:?}/{interpreter}: {ct}"
        );
        assert!([200, 500].contains(&resp.status_code));
    }
}

#[tokio::test]
async fn repeated_invocations_are_identical() {
    for (policy, interpreter, path) in [
        (LaunchPolicy::Blocking, "false", "/status"),
        (LaunchPolicy::Detached, "true", "/status"),
        (LaunchPolicy::Detached, "true", "/elsewhere"),
    ] {
        let h = handler(policy, interpreter);
        let first = h.handle(&FunctionRequest::get(path)).await;
        let second = h.handle(&FunctionRequest::get(path)).await;
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn handler_leaves_process_environment_untouched() {
    let before = std::env::var("STREAMLIT_SERVER_HEADLESS").ok();
    handler(LaunchPolicy::Blocking, "true")
        .handle(&FunctionRequest::get("/status"))
        .await;
    assert_eq!(std::env::var("STREAMLIT_SERVER_HEADLESS").ok(), before);
}
