use std::process::Stdio;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::LaunchPolicy;
use crate::errors::LaunchError;

use super::exit::{check_status, normalize_exit};
use super::{LaunchOutcome, LaunchSpec, Launcher};

/// Runs the child with inherited stdio and waits for it to exit.
pub async fn run_blocking(spec: &LaunchSpec) -> Result<i32, LaunchError> {
    let mut cmd = spec.command();
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = cmd.status().await.map_err(|source| LaunchError::Spawn {
        program: spec.program.clone(),
        source,
    })?;

    check_status(status)?;
    Ok(normalize_exit(status))
}

pub struct BlockingLauncher;

#[async_trait]
impl Launcher for BlockingLauncher {
    fn policy(&self) -> LaunchPolicy {
        LaunchPolicy::Blocking
    }

    async fn launch(&self, spec: &LaunchSpec) -> LaunchOutcome {
        info!(command = %spec.display(), "launching dashboard (blocking)");
        match run_blocking(spec).await {
            Ok(code) => {
                info!(exit_code = code, "dashboard process exited");
                LaunchOutcome::success(LaunchPolicy::Blocking)
            }
            Err(e) => {
                warn!(error.kind = "launch.blocking", error.message = %e, "dashboard launch failed");
                LaunchOutcome::failure(LaunchPolicy::Blocking, e.to_string())
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn spec(program: &str, args: &[&str]) -> LaunchSpec {
        LaunchSpec {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: None,
            env: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn zero_exit_succeeds() {
        assert_eq!(run_blocking(&spec("true", &[])).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn nonzero_exit_is_failure() {
        let err = run_blocking(&spec("sh", &["-c", "exit 4"])).await.unwrap_err();
        assert!(matches!(err, LaunchError::UnexpectedExit { code: 4 }));
    }

    #[tokio::test]
    async fn missing_program_is_spawn_failure() {
        let err = run_blocking(&spec("launchpad-no-such-interpreter", &[]))
            .await
            .unwrap_err();
        assert!(err.is_spawn_failure());
        assert!(err.to_string().contains("launchpad-no-such-interpreter"));
    }

    #[tokio::test]
    async fn child_sees_explicit_env() {
        let mut s = spec("sh", &["-c", "test \"$STREAMLIT_SERVER_PORT\" = 8501"]);
        s.env.insert("STREAMLIT_SERVER_PORT".into(), "8501".into());
        assert!(run_blocking(&s).await.is_ok());
    }

    #[tokio::test]
    async fn launcher_reports_outcome() {
        let ok = BlockingLauncher.launch(&spec("true", &[])).await;
        assert!(ok.succeeded());

        let failed = BlockingLauncher.launch(&spec("false", &[])).await;
        assert!(!failed.succeeded());
        assert_eq!(failed.mode(), LaunchPolicy::Blocking);
        assert!(failed.error_message().unwrap().contains("code=1"));
    }
}
