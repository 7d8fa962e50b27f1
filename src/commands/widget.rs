//! Interactive password widget.
//!
//! Reads one command per line and applies it to a [`Session`]. Bad input
//! only produces a hint; the loop ends on `quit` or end of input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::charset::{CharacterClass, UnknownClass};
use crate::cli::GenOptions;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::session::Session;
use crate::ui;

use super::CommandError;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    Length(u32),
    Toggle(CharacterClass),
    Show,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{0}' takes no further arguments, got '{1}'")]
    UnexpectedArgument(&'static str, String),

    #[error("'{0}' is not a number")]
    BadLength(String),

    #[error("{0}")]
    BadClass(String),
}

impl From<UnknownClass> for ParseActionError {
    fn from(e: UnknownClass) -> Self {
        ParseActionError::BadClass(e.to_string())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let cmd = words.next().unwrap_or("").to_lowercase();
        let arg = words.next();
        let extra = words.next();

        let bare = |name: &'static str, action: Action| match arg {
            Some(word) => Err(ParseActionError::UnexpectedArgument(name, word.to_string())),
            None => Ok(action),
        };
        let one_arg = |name: &'static str| match (arg, extra) {
            (None, _) => Err(ParseActionError::MissingArgument(name)),
            (Some(_), Some(word)) => Err(ParseActionError::UnexpectedArgument(name, word.to_string())),
            (Some(arg), None) => Ok(arg),
        };

        match cmd.as_str() {
            "generate" | "g" => bare("generate", Action::Generate),
            "copy" | "c" => bare("copy", Action::Copy),
            "length" | "l" => {
                let arg = one_arg("length")?;
                arg.parse()
                    .map(Action::Length)
                    .map_err(|_| ParseActionError::BadLength(arg.to_string()))
            }
            "toggle" | "t" => {
                let arg = one_arg("toggle")?;
                Ok(Action::Toggle(arg.parse()?))
            }
            "show" | "s" => bare("show", Action::Show),
            "help" | "h" | "?" => bare("help", Action::Help),
            "quit" | "q" | "exit" => bare("quit", Action::Quit),
            _ => Err(ParseActionError::Unknown(s.trim().to_string())),
        }
    }
}

pub fn run(options: &GenOptions) -> Result<(), CommandError> {
    let session = Session::with_state(options.length, options.classes())?;
    let stdin = io::stdin();
    let mut clipboard = SystemClipboard::new();
    drive(session, &mut stdin.lock(), &mut io::stdout(), &mut clipboard)
}

/// Run the widget loop over arbitrary input and output.
pub fn drive<R: BufRead, W: Write>(
    mut session: Session,
    input: &mut R,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
) -> Result<(), CommandError> {
    ui::render(out, &session)?;
    writeln!(out, "Type 'help' for commands.")?;

    while let Some(line) = ui::prompt_line(input, out, "> ")? {
        if line.is_empty() {
            continue;
        }

        let action = match line.parse::<Action>() {
            Ok(a) => a,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        log::debug!("widget action: {:?}", action);

        match action {
            Action::Generate => match session.generate() {
                Some(toast) => ui::print_toast(out, &toast)?,
                None => writeln!(out, "  [ {} ]", session.password())?,
            },
            Action::Copy => {
                let toast = session.copy(clipboard);
                ui::print_toast(out, &toast)?;
            }
            Action::Length(n) => match session.set_length(n) {
                Ok(()) => writeln!(out, "Character Length: {}", n)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Action::Toggle(class) => {
                let on = session.toggle(class);
                writeln!(out, "{}: {}", class.label(), if on { "on" } else { "off" })?;
            }
            Action::Show => ui::render(out, &session)?,
            Action::Help => ui::print_help(out)?,
            Action::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::RecordingClipboard;
    use crate::session::PLACEHOLDER;

    fn run_script(script: &str, clipboard: &mut RecordingClipboard) -> String {
        run_bytes(script.as_bytes(), clipboard)
    }

    fn run_bytes(script: &[u8], clipboard: &mut RecordingClipboard) -> String {
        let mut input = io::Cursor::new(script.to_vec());
        let mut out = Vec::new();
        drive(Session::new(), &mut input, &mut out, clipboard).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_actions() {
        assert_eq!("g".parse::<Action>(), Ok(Action::Generate));
        assert_eq!("COPY".parse::<Action>(), Ok(Action::Copy));
        assert_eq!("length 12".parse::<Action>(), Ok(Action::Length(12)));
        assert_eq!("t sym".parse::<Action>(), Ok(Action::Toggle(CharacterClass::Symbols)));
        assert_eq!("exit".parse::<Action>(), Ok(Action::Quit));
        assert_eq!(
            "length".parse::<Action>(),
            Err(ParseActionError::MissingArgument("length"))
        );
        assert_eq!(
            "l ten".parse::<Action>(),
            Err(ParseActionError::BadLength("ten".into()))
        );
        assert!(matches!("toggle emoji".parse::<Action>(), Err(ParseActionError::BadClass(_))));
        assert!(matches!("dance".parse::<Action>(), Err(ParseActionError::Unknown(_))));
    }

    #[test]
    fn rejects_trailing_words() {
        assert_eq!(
            "length 12 junk".parse::<Action>(),
            Err(ParseActionError::UnexpectedArgument("length", "junk".into()))
        );
        assert_eq!(
            "generate now".parse::<Action>(),
            Err(ParseActionError::UnexpectedArgument("generate", "now".into()))
        );
        assert_eq!(
            "t upper lower".parse::<Action>(),
            Err(ParseActionError::UnexpectedArgument("toggle", "lower".into()))
        );
    }

    #[test]
    fn invalid_utf8_line_keeps_session_alive() {
        let mut clipboard = RecordingClipboard::default();
        let out = run_bytes(b"\xff\xfe junk\ncopy\n", &mut clipboard);

        assert!(out.contains("unknown command"));
        assert!(out.contains("✔ Password copied to clipboard!"));
        assert_eq!(clipboard.writes, vec![PLACEHOLDER.to_string()]);
    }

    #[test]
    fn trailing_words_print_a_hint() {
        let mut clipboard = RecordingClipboard::default();
        let out = run_script("copy twice
", &mut clipboard);

        assert!(out.contains("'copy' takes no further arguments, got 'twice'"));
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn generate_with_nothing_selected_warns() {
        let mut clipboard = RecordingClipboard::default();
        let out = run_script("generate\nquit\n", &mut clipboard);
        assert!(out.contains("✖ Please select at least one character set"));
    }

    #[test]
    fn full_session_copies_generated_password() {
        let mut clipboard = RecordingClipboard::default();
        let out = run_script("toggle numbers\nlength 6\ngenerate\ncopy\n", &mut clipboard);

        assert!(out.contains("Include Numbers: on"));
        assert!(out.contains("Character Length: 6"));
        assert!(out.contains("✔ Password copied to clipboard!"));

        assert_eq!(clipboard.writes.len(), 1);
        let copied = &clipboard.writes[0];
        assert_eq!(copied.len(), 6);
        assert!(copied.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn bad_input_keeps_session_alive() {
        let mut clipboard = RecordingClipboard::default();
        let out = run_script("length 50\nwhat\ncopy\n", &mut clipboard);

        assert!(out.contains("length 50 is out of range (4-20)"));
        assert!(out.contains("unknown command 'what'"));
        assert_eq!(clipboard.writes, vec![PLACEHOLDER.to_string()]);
    }

    #[test]
    fn clipboard_failure_is_reported() {
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let out = run_script("copy\n", &mut clipboard);
        assert!(out.contains("✖ Unable to copy password"));
    }
}
