//! Raw mode guard and single-key reads.

use std::io;

use crossterm::event::{Event, KeyEvent, KeyEventKind, read};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Disables raw mode when dropped.
pub struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { enabled: true })
    }

    pub fn disable(&mut self) {
        if self.enabled {
            let _ = disable_raw_mode();
            self.enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Block until a key is pressed. Raw mode is only held for the read.
pub fn read_key() -> io::Result<KeyEvent> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Event::Key(key) = read()?
            && key.kind != KeyEventKind::Release
        {
            return Ok(key);
        }
    }
}
