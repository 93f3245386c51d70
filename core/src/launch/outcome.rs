use crate::config::LaunchPolicy;

/// Result of one attempt to start the dashboard process.
///
/// `error_message` is present iff `succeeded` is false; the constructors are
/// the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    mode: LaunchPolicy,
    succeeded: bool,
    error_message: Option<String>,
}

impl LaunchOutcome {
    pub fn success(mode: LaunchPolicy) -> Self {
        Self {
            mode,
            succeeded: true,
            error_message: None,
        }
    }

    pub fn failure(mode: LaunchPolicy, message: impl Into<String>) -> Self {
        Self {
            mode,
            succeeded: false,
            error_message: Some(message.into()),
        }
    }

    pub fn mode(&self) -> LaunchPolicy {
        self.mode
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
