use std::path::Path;

use anyhow::Result;
use log::debug;

use crate::file_utils::FileManager;

// @module: Subtitle cue parsing and spoken-text extraction

/// One timed subtitle block: an identifier line, a timing line and the spoken
/// text lines. Only the text lines matter downstream; the cue itself is never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct Cue {
    /// Identifier line, usually a sequence number
    pub id: String,

    /// Timing line, kept verbatim (not validated)
    pub timing: String,

    /// Spoken text lines, trimmed
    pub text_lines: Vec<String>,
}

/// Parser state while walking the file line by line.
///
/// The parser is lenient, not validating: a malformed cue (say, one missing
/// its timing line) advances the state anyway and at worst contributes
/// incomplete text, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtractorState {
    /// Waiting for a cue identifier; blank lines are skipped
    LookingForId,
    /// The next line is consumed as the timing line, whatever it contains
    LookingForTime,
    /// Accumulating text lines until a blank or markup line ends the cue
    LookingForText,
}

/// Extracts spoken text from subtitle-formatted files
pub struct SubtitleExtractor;

impl SubtitleExtractor {
    /// Parse subtitle content into cues.
    ///
    /// Runs the three-state machine over trimmed lines. While looking for
    /// text, a blank line or a line opening markup (`<`) terminates the cue
    /// and is discarded. A trailing unterminated cue is still flushed when
    /// the input ends.
    pub fn parse_str(content: &str) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut state = ExtractorState::LookingForId;
        let mut current = Cue::default();

        for line in content.lines() {
            let message = line.trim();
            match state {
                ExtractorState::LookingForId => {
                    if message.is_empty() {
                        continue;
                    }
                    current.id = message.to_string();
                    state = ExtractorState::LookingForTime;
                }
                ExtractorState::LookingForTime => {
                    current.timing = message.to_string();
                    state = ExtractorState::LookingForText;
                }
                ExtractorState::LookingForText => {
                    if !message.is_empty() && !message.starts_with('<') {
                        current.text_lines.push(message.to_string());
                    } else {
                        // Terminating line is discarded, never appended
                        cues.push(std::mem::take(&mut current));
                        state = ExtractorState::LookingForId;
                    }
                }
            }
        }

        // Flush the trailing cue if the file ended mid-block
        if state == ExtractorState::LookingForText {
            cues.push(current);
        }

        debug!("Parsed {} subtitle cues", cues.len());
        cues
    }

    /// Join the text lines of all cues into one lowercase blob, separated by
    /// single spaces.
    pub fn extract_text(cues: &[Cue]) -> String {
        let lines: Vec<&str> = cues
            .iter()
            .flat_map(|cue| cue.text_lines.iter())
            .map(|line| line.as_str())
            .collect();

        lines.join(" ").to_lowercase()
    }

    /// Read a subtitle file and extract its spoken text.
    ///
    /// The file is decoded lossily: undecodable bytes are dropped rather than
    /// raised, matching the tolerance of the cue parser itself.
    pub fn extract_text_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
        let content = FileManager::read_to_string_lossy(path)?;
        let cues = Self::parse_str(&content);
        Ok(Self::extract_text(&cues))
    }
}
