//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `launchpad_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load, load_default, AppConfig, HttpServerConfig, LaunchConfig, LaunchPolicy, LoggingConfig,
    PagesConfig, RoutesConfig,
};
pub use crate::errors::{CliError, ConfigError, HandlerFault, LaunchError};
pub use crate::handler::{FunctionRequest, FunctionResponse, LaunchHandler};
pub use crate::launch::{launcher_for, DetachedLaunch, LaunchOutcome, LaunchSpec, Launcher};
