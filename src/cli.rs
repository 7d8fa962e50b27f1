//! Command-line interface definitions for passgen.
//!
//! This module defines the public CLI surface using `clap`. It contains no
//! application logic and exists solely to describe how users interact with
//! the program from the terminal.

use clap::{Args, Parser, Subcommand};

use crate::charset::{CharacterClass, ClassSet};
use crate::session::{MAX_LENGTH, MIN_LENGTH};

#[derive(Parser)]
#[command(
    name = "passgen",
    version = "0.1",
    about = "A small random password generator",
    long_about = r#"
passgen builds a pool from the character classes you enable and draws
each character of the password uniformly at random from it.

Typical usage:
  passgen gen --length 12 --uppercase --lowercase --numbers
  passgen gen -l 16 --symbols --numbers --copy
  passgen widget

Nothing is stored. A generated password lives only in memory until it is
printed or copied to the clipboard.
"#,
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a single password and print it
    ///
    /// At least one character class must be enabled.
    Gen {
        #[command(flatten)]
        options: GenOptions,

        /// Copy the generated password to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Open the interactive password widget
    ///
    /// The flags seed the widget's initial state; everything can be
    /// changed from inside the session.
    Widget {
        #[command(flatten)]
        options: GenOptions,
    },
}

#[derive(Args, Clone, Debug)]
pub struct GenOptions {
    /// Length of the generated password
    #[arg(
        short,
        long,
        default_value_t = MIN_LENGTH,
        value_parser = clap::value_parser!(u32).range(MIN_LENGTH as i64..=MAX_LENGTH as i64),
    )]
    pub length: u32,

    /// Include uppercase letters (A–Z)
    #[arg(long)]
    pub uppercase: bool,

    /// Include lowercase letters (a–z)
    #[arg(long)]
    pub lowercase: bool,

    /// Include numbers (0–9)
    #[arg(long)]
    pub numbers: bool,

    /// Include symbols (!@#$%^&*()_+<>?)
    #[arg(long)]
    pub symbols: bool,

    /// Include every character class
    #[arg(short, long)]
    pub all: bool,
}

impl GenOptions {
    pub fn classes(&self) -> ClassSet {
        if self.all {
            return ClassSet::all();
        }
        let mut set = ClassSet::new();
        set.set(CharacterClass::Uppercase, self.uppercase);
        set.set(CharacterClass::Lowercase, self.lowercase);
        set.set(CharacterClass::Numbers, self.numbers);
        set.set(CharacterClass::Symbols, self.symbols);
        set
    }
}
