//! latest: print the newest (or oldest) files among paths and glob patterns.
//!
//! Thin binary entry point. All logic lives in the `latest-core`
//! and `latest-cli` crates.

use clap::Parser;
use latest_cli::logging::{max_level, LOG_ENV};
use latest_cli::{Args, RequestError};
use std::process::ExitCode;

/// Exit status for rejected flag combinations, matching clap's usage errors.
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    // clap reports usage errors and --version itself, then exits.
    let args = Args::parse();

    // Initialise structured logging on stderr, next to the diagnostics.
    let level = max_level(args.quiet, std::env::var(LOG_ENV).ok().as_deref());
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    tracing::debug!("latest starting");

    let program = program_name();
    match latest_cli::execute(args, &program) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("{program}: {err:#}");
            if err.downcast_ref::<RequestError>().is_some() {
                ExitCode::from(USAGE_EXIT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Basename of `argv[0]`, falling back to the package name.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
