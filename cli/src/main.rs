use clap::Parser;
mod commands;
mod convert;
mod http;
mod logging;
use commands::cli;
use launchpad_core::api::{self as core_api, AppConfig, CliError};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run(cli::Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // logging may not be up yet, so report directly
            eprintln!("launchpad: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args) -> Result<(), CliError> {
    let cfg = load_config(&args)?;
    let _log_guard = logging::init(&cfg.logging)?;

    tracing::debug!(policy = cfg.launch.policy.as_str(), "configuration loaded");

    match args.command {
        cli::Commands::Lambda => commands::lambda::handle_lambda(&cfg).await,
        cli::Commands::Invoke(invoke_args) => {
            commands::invoke::handle_invoke(invoke_args, &cfg).await
        }
        cli::Commands::Serve(serve_args) => commands::serve::handle_serve(serve_args, &cfg).await,
    }
}

fn load_config(args: &cli::Args) -> Result<AppConfig, CliError> {
    let mut cfg = core_api::load(args.config.as_deref())?;
    if let Some(policy) = args.policy {
        cfg.launch.policy = policy.into();
    }
    if let Some(interpreter) = &args.interpreter {
        cfg.launch.interpreter = interpreter.clone();
    }
    Ok(cfg)
}
