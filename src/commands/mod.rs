//! Command dispatch layer for passgen.
//!
//! This module maps parsed CLI commands to their concrete implementations.
//! Each command lives in its own file and exposes a single `run()` function.

use std::io;

use crate::cli::{Cli, Commands};
use crate::clipboard::ClipboardError;
use crate::generator::GenerateError;
use crate::session::SessionError;

pub mod gen_pw;
pub mod widget;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Unable to copy password: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub fn dispatch(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::Gen { options, copy } => gen_pw::run(&options, copy),
        Commands::Widget { options } => widget::run(&options),
    }
}
