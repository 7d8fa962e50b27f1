//! Clipboard access.
//!
//! The widget only ever writes to the clipboard, so the seam is a single
//! method. `SystemClipboard` talks to the platform; tests substitute their
//! own implementation.

use ::clipboard::{ClipboardContext, ClipboardProvider};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard init error: {0}")]
    Init(String),

    #[error("Clipboard set error: {0}")]
    Write(String),
}

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard, opened lazily on first write.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = match self.ctx.as_mut() {
            Some(ctx) => ctx,
            None => {
                let ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| ClipboardError::Init(e.to_string()))?;
                self.ctx.insert(ctx)
            }
        };

        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
