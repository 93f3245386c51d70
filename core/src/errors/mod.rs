pub mod cli_error;
pub mod config_error;
pub mod handler_error;
pub mod launch_error;

pub use cli_error::CliError;
pub use config_error::ConfigError;
pub use handler_error::HandlerFault;
pub use launch_error::LaunchError;
