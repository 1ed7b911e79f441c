use std::collections::VecDeque;

use anyhow::{anyhow, Result};

use crate::terminal;

// @module: Keystroke sources for the review loop

/// Seam for single-keystroke command input.
///
/// The controller only ever needs "block until one key"; the trait keeps the
/// navigation and skip logic testable without a TTY.
pub trait KeyInput {
    /// Block until one keystroke and return its character
    fn read_key(&mut self) -> Result<char>;
}

/// Terminal-backed input reading one raw keystroke at a time
#[derive(Debug, Default)]
pub struct TerminalInput;

impl KeyInput for TerminalInput {
    fn read_key(&mut self) -> Result<char> {
        terminal::read_key()
    }
}

/// Scripted key sequence for tests
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<char>,
}

impl ScriptedInput {
    /// Create a script from the characters of `keys`, consumed in order
    pub fn new(keys: &str) -> Self {
        ScriptedInput {
            keys: keys.chars().collect(),
        }
    }
}

impl KeyInput for ScriptedInput {
    fn read_key(&mut self) -> Result<char> {
        self.keys
            .pop_front()
            .ok_or_else(|| anyhow!("Scripted input exhausted"))
    }
}
