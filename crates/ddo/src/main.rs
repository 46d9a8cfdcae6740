//! ddo - Den Danske Ordbog in the terminal
//!
//! Two entry points share this binary:
//!
//! - `ddo <word>` prints the formatted dictionary entry.
//! - With `_DDO_COMPLETE` set, the binary acts as a completion backend for
//!   the shell and prints plain suggestions or a completion script instead.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use ddo::completion::{self, CompletionRequest};
use ddo::{Client, Config, HttpTransport, LookupError};

use cli::Cli;

/// Exit code for failures outside the lookup itself
const GENERAL_FAILURE: u8 = 5;

fn main() -> ExitCode {
    if let Some(request) = CompletionRequest::from_env() {
        init_logging(completion_filter());
        return run_completion(&request);
    }

    let cli = Cli::parse();
    init_logging(if cli.verbose {
        EnvFilter::new("ddo=debug")
    } else {
        EnvFilter::from_default_env()
    });

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<LookupError>()
        .map(LookupError::exit_code)
        .unwrap_or(GENERAL_FAILURE)
}

/// Completion always exits cleanly; a shell has no use for our errors.
fn run_completion(request: &CompletionRequest) -> ExitCode {
    if let CompletionRequest::Source(shell) = request {
        print!("{}", shell.script());
        return ExitCode::SUCCESS;
    }

    let config = Config::default();
    match HttpTransport::new(&config) {
        Ok(transport) => {
            let client = Client::new(transport, config);
            print!("{}", completion::respond(request, &client));
        }
        Err(err) => tracing::debug!(error = %err, "no transport for completion"),
    }
    ExitCode::SUCCESS
}

/// Anything on stderr would land in the user's prompt, so completion mode
/// logs nothing regardless of `RUST_LOG`.
fn completion_filter() -> EnvFilter {
    EnvFilter::new("off")
}

/// Logs go to stderr so stdout stays reserved for entries and suggestions.
fn init_logging(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
