//! In-memory state of one widget session.
//!
//! The session owns everything the widget shows: the current password, the
//! length control and the four class toggles. Actions never fail outright;
//! anything the user should hear about comes back as a [`Toast`].

use zeroize::Zeroizing;

use crate::charset::{CharacterClass, ClassSet};
use crate::clipboard::Clipboard;
use crate::generator;

pub const MIN_LENGTH: u32 = 4;
pub const MAX_LENGTH: u32 = 20;

/// Shown until the first successful generation.
pub const PLACEHOLDER: &str = "Generated Password";

pub const COPY_SUCCESS: &str = "Password copied to clipboard!";
pub const COPY_FAILURE: &str = "Unable to copy password";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("length {0} is out of range ({min}-{max})", min = MIN_LENGTH, max = MAX_LENGTH)]
    LengthOutOfRange(u32),
}

/// A transient notification raised by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Error(String),
}

pub struct Session {
    password: Zeroizing<String>,
    length: u32,
    classes: ClassSet,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            password: Zeroizing::new(PLACEHOLDER.to_string()),
            length: MIN_LENGTH,
            classes: ClassSet::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a chosen length and set of toggles.
    pub fn with_state(length: u32, classes: ClassSet) -> Result<Self, SessionError> {
        let mut session = Self::new();
        for class in CharacterClass::ALL {
            session.set_class(class, classes.contains(class));
        }
        session.set_length(length)?;
        Ok(session)
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    pub fn set_length(&mut self, length: u32) -> Result<(), SessionError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(SessionError::LengthOutOfRange(length));
        }
        self.length = length;
        Ok(())
    }

    pub fn set_class(&mut self, class: CharacterClass, on: bool) {
        self.classes.set(class, on);
    }

    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.classes.toggle(class)
    }

    /// Replace the password with a fresh one.
    ///
    /// With no class enabled the previous password stays on display and an
    /// error toast is returned instead.
    pub fn generate(&mut self) -> Option<Toast> {
        match generator::generate(self.length as usize, &self.classes) {
            Ok(pwd) => {
                self.password = Zeroizing::new(pwd);
                log::info!("generated a {}-character password", self.length);
                None
            }
            Err(e) => {
                log::info!("generation aborted: {}", e);
                Some(Toast::Error(e.to_string()))
            }
        }
    }

    /// Write the displayed password to `clipboard`, once.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Toast {
        match clipboard.set_text(&self.password) {
            Ok(()) => Toast::Success(COPY_SUCCESS.to_string()),
            Err(e) => {
                log::error!("Unable to copy password: {}", e);
                Toast::Error(COPY_FAILURE.to_string())
            }
        }
    }
}
