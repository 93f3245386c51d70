// core/src/errors/launch_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to spawn process: {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("process exited unexpectedly: code={code}")]
    UnexpectedExit { code: i32 },

    #[error("process killed by signal: {signal}")]
    Signal { signal: i32 },

    #[error("failed to wait for process: {0}")]
    Wait(#[source] std::io::Error),
}

impl LaunchError {
    /// True when the child never started, as opposed to starting and failing.
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, LaunchError::Spawn { .. })
    }
}
