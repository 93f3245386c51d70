use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use launchpad_core::api::LaunchPolicy;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    Blocking,
    Detached,
}

impl From<PolicyArg> for LaunchPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Blocking => LaunchPolicy::Blocking,
            PolicyArg::Detached => LaunchPolicy::Detached,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Attempt to launch a Streamlit dashboard from a hosting function")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file. Defaults to ./launchpad.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Launch policy, overriding the config file.
    #[arg(long, value_enum, global = true)]
    pub policy: Option<PolicyArg>,

    /// Python interpreter used to run the dashboard.
    #[arg(long, global = true)]
    pub interpreter: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run as a deployed function, answering API Gateway proxy events from the runtime API.
    Lambda,
    /// Debug aid: handle a single function event and print the response as JSON.
    Invoke(InvokeArgs),
    /// Serve the function over HTTP.
    Serve(ServeArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InvokeArgs {
    /// Event file, or `-` for stdin. Without it, a GET on the status path is handled.
    #[arg(long)]
    pub event: Option<String>,

    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,
}
