use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// @module: File utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a file to a string, dropping invalid UTF-8 sequences instead of failing.
    ///
    /// Subtitle files come from all kinds of rippers and encoders; undecodable
    /// bytes are dropped rather than aborting the run. Dropping (not replacing)
    /// matters downstream: a replacement character would split the surrounding
    /// word at tokenization.
    pub fn read_to_string_lossy<P: AsRef<Path>>(path: P) -> Result<String> {
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;
        Ok(Self::decode_dropping_invalid(&bytes))
    }

    /// Decode UTF-8 chunk-wise, skipping over invalid byte sequences
    fn decode_dropping_invalid(mut bytes: &[u8]) -> String {
        let mut decoded = String::with_capacity(bytes.len());

        loop {
            match std::str::from_utf8(bytes) {
                Ok(valid) => {
                    decoded.push_str(valid);
                    return decoded;
                }
                Err(error) => {
                    // The prefix up to the error is valid; from_utf8_lossy on it
                    // introduces no replacement characters
                    decoded.push_str(&String::from_utf8_lossy(&bytes[..error.valid_up_to()]));

                    // error_len is None for a truncated sequence at end of input
                    let skip = match error.error_len() {
                        Some(len) => len,
                        None => return decoded,
                    };
                    bytes = &bytes[error.valid_up_to() + skip..];
                }
            }
        }
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Find the first line in a file containing the given word, case-insensitively.
    ///
    /// Used by the review session's context command. Returns None when the word
    /// does not appear in the file at all.
    pub fn find_context_line<P: AsRef<Path>>(path: P, word: &str) -> Result<Option<String>> {
        let content = Self::read_to_string_lossy(&path)?;
        let needle = word.to_lowercase();

        for line in content.lines() {
            if line.to_lowercase().contains(&needle) {
                return Ok(Some(line.trim().to_string()));
            }
        }

        Ok(None)
    }
}
