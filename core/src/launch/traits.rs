use std::sync::Arc;

use async_trait::async_trait;

use crate::config::LaunchPolicy;

use super::{BlockingLauncher, DetachedLauncher, LaunchOutcome, LaunchSpec};

#[async_trait]
pub trait Launcher: Send + Sync {
    fn policy(&self) -> LaunchPolicy;

    /// Starts the child described by `spec`. Never fails: launch errors are
    /// folded into the returned outcome.
    async fn launch(&self, spec: &LaunchSpec) -> LaunchOutcome;
}

pub fn launcher_for(policy: LaunchPolicy) -> Arc<dyn Launcher> {
    match policy {
        LaunchPolicy::Blocking => Arc::new(BlockingLauncher),
        LaunchPolicy::Detached => Arc::new(DetachedLauncher),
    }
}
