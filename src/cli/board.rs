//! Clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub struct Board(ClipboardContext);

impl Board {
    pub fn open() -> Result<Self> {
        ClipboardContext::new()
            .map(Board)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }

    /// Copy `text` to the clipboard, wiping the read-back copy.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
