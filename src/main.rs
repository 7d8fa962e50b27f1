//! passgen — a small random password widget for the terminal.
//!
//! This file is the application entry point. It is intentionally kept small
//! and is responsible only for:
//!
//! - Parsing CLI arguments
//! - Configuring logging
//! - Dispatching subcommands
//! - Exiting with appropriate status codes
//!
//! Command implementations live in `commands/`, terminal helpers in `ui.rs`.

use clap::Parser;

mod charset;
mod cli;
mod clipboard;
mod commands;
mod generator;
mod session;
mod ui;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG, when set, wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::dispatch(cli) {
        log::debug!("command failed: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
