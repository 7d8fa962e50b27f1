//! Terminal rendering and input helpers.
//!
//! This module centralizes all terminal I/O. No generation or clipboard
//! logic should live here.

use std::io::{self, BufRead, Write};

use crate::charset::CharacterClass;
use crate::session::{Session, Toast, MAX_LENGTH, MIN_LENGTH};

pub fn render<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "Random Password Generator")?;
    writeln!(out, "  [ {} ]", session.password())?;
    writeln!(out)?;
    writeln!(
        out,
        "Character Length: {}  (Min {} .. Max {})",
        session.length(),
        MIN_LENGTH,
        MAX_LENGTH
    )?;
    writeln!(out)?;
    writeln!(out, "Include")?;
    for class in CharacterClass::ALL {
        let mark = if session.classes().contains(class) { 'x' } else { ' ' };
        writeln!(out, "  [{}] {:<28} ({})", mark, class.label(), class)?;
    }
    Ok(())
}

pub fn print_toast<W: Write>(out: &mut W, toast: &Toast) -> io::Result<()> {
    match toast {
        Toast::Success(m) => writeln!(out, "✔ {}", m),
        Toast::Error(m) => writeln!(out, "✖ {}", m),
    }
}

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  generate | g            generate a new password")?;
    writeln!(out, "  copy | c                copy the password to the clipboard")?;
    writeln!(out, "  length | l <{}-{}>      set the password length", MIN_LENGTH, MAX_LENGTH)?;
    writeln!(out, "  toggle | t <class>      toggle upper, lower, numbers or symbols")?;
    writeln!(out, "  show | s                show the widget")?;
    writeln!(out, "  help | h                show this help")?;
    writeln!(out, "  quit | q                leave")
}

/// Print `prompt` and read one line. `None` on end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD rather than an error.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}
