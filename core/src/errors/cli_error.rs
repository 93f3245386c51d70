// core/src/errors/cli_error.rs
use thiserror::Error;

use super::ConfigError;

/// Adapter-level failures of the `launchpad` binary. The handler itself never
/// produces one.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid function event: {0}")]
    Event(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("http server error: {0}")]
    Server(String),

    #[error("function runtime error: {0}")]
    Runtime(String),
}
