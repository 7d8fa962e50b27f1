//! Generate a random password.

use std::io::{self, Write};

use zeroize::Zeroizing;

use crate::cli::GenOptions;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::session::{Toast, COPY_SUCCESS};
use crate::{generator, ui};

use super::CommandError;

pub fn run(options: &GenOptions, copy: bool) -> Result<(), CommandError> {
    let pwd = Zeroizing::new(generator::generate(
        options.length as usize,
        &options.classes(),
    )?);

    print_password(&mut io::stdout().lock(), &pwd)?;

    if copy {
        copy_and_report(&pwd, &mut SystemClipboard::new(), &mut io::stderr())?;
    }

    Ok(())
}

/// Write the password on its own line. A closed pipe is an error, not a panic.
pub fn print_password<W: Write>(out: &mut W, pwd: &str) -> Result<(), CommandError> {
    writeln!(out, "{}", pwd)?;
    out.flush()?;
    Ok(())
}

/// Copy `pwd` and print the success toast to `out`.
///
/// A clipboard failure is logged and returned so the process exits non-zero.
pub fn copy_and_report<W: Write>(
    pwd: &str,
    clipboard: &mut dyn Clipboard,
    out: &mut W,
) -> Result<(), CommandError> {
    clipboard.set_text(pwd).map_err(|e| {
        log::error!("Unable to copy password: {}", e);
        e
    })?;
    ui::print_toast(out, &Toast::Success(COPY_SUCCESS.to_string()))?;
    Ok(())
}
