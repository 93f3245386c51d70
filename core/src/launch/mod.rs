//! Starting the dashboard process.
//!
//! A [`LaunchSpec`] describes the child explicitly (program, args, cwd, env);
//! a [`Launcher`] starts it under one [`LaunchPolicy`] and reports a
//! [`LaunchOutcome`]. Nothing here touches the calling process's environment.

mod blocking;
mod detached;
pub mod exit;
mod outcome;
mod spec;
mod traits;

pub use blocking::{run_blocking, BlockingLauncher};
pub use detached::{spawn_detached, DetachedLaunch, DetachedLauncher};
pub use outcome::LaunchOutcome;
pub use spec::{child_env, LaunchSpec};
pub use traits::{launcher_for, Launcher};

pub use crate::config::LaunchPolicy;
