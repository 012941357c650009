//! `resend` entry point
//!
//! Logs go to stderr; stdout carries command output only.

use std::process::ExitCode;

use clap::Parser;
use resend_cli::cli::{Cli, Invocation, Leaf, usage_exit_code};
use resend_cli::commands::{dispatch, run_action};
use resend_cli::config::Settings;
use resend_cli::error::CliResult;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter variable; unset keeps the CLI quiet.
const LOG_ENV: &str = "RESEND_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests land here too
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    let leaf = match cli.into_invocation() {
        Invocation::Help(text) => {
            println!("{text}");
            return ExitCode::SUCCESS;
        }
        Invocation::Run(leaf) => leaf,
    };

    run_action(execute(leaf)).await
}

/// Builds the client once and runs the command with it.
async fn execute(leaf: Leaf) -> CliResult<String> {
    let settings = Settings::from_env()?;
    tracing::debug!("Settings loaded: {settings:?}");
    let client = settings.build_client()?;
    dispatch(client.as_ref(), leaf).await
}
