//! Entry point of the `scrawl` binary.
//!
//! Parses the command line, sets up logging and hands over to
//! [`scrawl_cli::run`]. Failures are printed as miette reports and end the
//! process with exit code 1.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use scrawl_cli::{Args, error_adapter::render_report};

fn main() {
    // Panics get the same report formatting as ordinary errors
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    if let Err(err) = scrawl_cli::run(&args) {
        error!("{}", render_report(&err));
        process::exit(1);
    }

    info!("Completed successfully");
}

/// Installs env_logger filtered at `level`, falling back to `warn` when the
/// name is not a known level.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level '{level}', falling back to 'warn'");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();

    info!(log_level:? = filter; "Starting Scrawl");
}
