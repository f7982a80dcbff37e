use std::process::ExitCode;

use clap::Parser;
use lokey::cli::{Arguments, Command, ExitStatus};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = lokey::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match lokey::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Diagnostics go to stderr; `LOKEY_LOG` takes precedence over `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_env("LOKEY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("lokey={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
