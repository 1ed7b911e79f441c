/*!
 * Interactive review session for classifying words.
 *
 * This module provides:
 * - The single-keystroke command loop over the review list
 * - Forward-skip of already-classified words
 * - Context lookup and on-demand translation
 */

pub mod controller;
pub mod input;

// Re-export main types
pub use controller::{SessionController, SessionOutcome};
pub use input::{KeyInput, ScriptedInput, TerminalInput};
