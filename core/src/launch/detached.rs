use std::process::Stdio;

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::config::LaunchPolicy;
use crate::errors::LaunchError;

use super::exit::{check_status, normalize_exit};
use super::{LaunchOutcome, LaunchSpec, Launcher};

/// Handle to a child started without waiting.
///
/// Dropping it does not stop the child; `exit` just goes unobserved.
#[derive(Debug)]
pub struct DetachedLaunch {
    pub pid: Option<u32>,
    pub exit: oneshot::Receiver<Result<i32, LaunchError>>,
}

impl DetachedLaunch {
    /// Waits for the watcher task to report the child's exit.
    pub async fn wait(self) -> Result<i32, LaunchError> {
        match self.exit.await {
            Ok(res) => res,
            Err(_) => Err(LaunchError::Wait(std::io::Error::other(
                "exit watcher dropped before reporting",
            ))),
        }
    }
}

/// Spawns the child with null stdio in its own process group, then hands
/// its exit to a watcher task. Must be called inside a tokio runtime.
pub fn spawn_detached(spec: &LaunchSpec) -> Result<DetachedLaunch, LaunchError> {
    let mut cmd = spec.command();
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(false);
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd.spawn().map_err(|source| LaunchError::Spawn {
        program: spec.program.clone(),
        source,
    })?;
    let pid = child.id();

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let res = match child.wait().await {
            Ok(status) => check_status(status).map(|_| normalize_exit(status)),
            Err(e) => Err(LaunchError::Wait(e)),
        };
        match &res {
            Ok(code) => debug!(pid = ?pid, exit_code = code, "detached dashboard exited"),
            Err(e) => warn!(pid = ?pid, error.message = %e, "detached dashboard ended abnormally"),
        }
        let _ = tx.send(res);
    });

    Ok(DetachedLaunch { pid, exit: rx })
}

pub struct DetachedLauncher;

#[async_trait]
impl Launcher for DetachedLauncher {
    fn policy(&self) -> LaunchPolicy {
        LaunchPolicy::Detached
    }

    async fn launch(&self, spec: &LaunchSpec) -> LaunchOutcome {
        info!(command = %spec.display(), "launching dashboard (detached)");
        match spawn_detached(spec) {
            Ok(handle) => {
                info!(pid = ?handle.pid, "dashboard spawned; not waiting for it");
                // The handler has no use for the child's fate.
                drop(handle);
                LaunchOutcome::success(LaunchPolicy::Detached)
            }
            Err(e) => {
                warn!(error.kind = "launch.detached", error.message = %e, "dashboard spawn failed");
                LaunchOutcome::failure(LaunchPolicy::Detached, e.to_string())
            }
        }
    }
}
