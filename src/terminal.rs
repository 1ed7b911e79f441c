use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

// @module: Raw-mode keystroke input and ANSI color codes

/// Bold yellow, used to highlight the matched word in a context line
pub const HIGHLIGHT: &str = "\x1B[1;33m";

/// Bold cyan, used for translations
pub const ACCENT: &str = "\x1B[1;36m";

/// Reset all attributes
pub const RESET: &str = "\x1B[0m";

/// Scoped raw-mode acquisition.
///
/// Raw mode is enabled on construction and disabled on drop, so every exit
/// path (normal return, quit, error, panic unwind) restores the terminal.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable terminal raw mode")?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Block until one keystroke and return its character.
///
/// Raw mode is held only for the duration of the read, so prompts printed
/// between reads behave like normal cooked-mode output. Ctrl-C is mapped to
/// 'q' because raw mode swallows the interrupt signal.
pub fn read_key() -> Result<char> {
    let _guard = RawModeGuard::new()?;

    loop {
        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok('q');
                }
                KeyCode::Char(c) => return Ok(c),
                _ => continue,
            },
            _ => continue,
        }
    }
}
