//! Compare two benchmark CSV files and summarize the differences with Gemini.

use std::process::ExitCode;
use clap::Parser;
use crate::config::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use crate::errors::ErrorHandler;
use crate::structs::cli::Cli;
use crate::workers::command_runner::CommandRunner;

mod config;
mod enums;
mod errors;
mod helpers;
mod logger;
mod prompts;
mod services;
mod structs;
mod traits;
mod workers;

fn init_logger(verbose: bool) {
    let default_filter = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match CommandRunner::new().run_command(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
