use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::DatabaseError;

// @module: Persisted word-classification database

/// Timestamp format used in persisted records
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Classification of one word, stored as its single-character code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordStatus {
    /// Not a real word (OCR garbage, onomatopoeia, ...)
    #[serde(rename = "W")]
    NotAWord,

    /// A proper name
    #[serde(rename = "N")]
    Name,

    /// Already known to the user
    #[serde(rename = "Y")]
    Known,

    /// Not yet known, to be learned
    #[serde(rename = "?")]
    Unknown,
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code = match self {
            WordStatus::NotAWord => "W",
            WordStatus::Name => "N",
            WordStatus::Known => "Y",
            WordStatus::Unknown => "?",
        };
        write!(f, "{}", code)
    }
}

/// Persisted classification decision for one word.
///
/// At most one record exists per word; a later classification overwrites the
/// earlier one. Records are created and updated by the review session only,
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    /// Classification code
    pub status: WordStatus,

    /// File name the word was encountered in
    pub source: String,

    /// Classification time, `YYYY-MM-DD HH:MM:SS UTC`
    pub dt: String,

    /// Machine translation fetched during the same visit, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl VocabularyRecord {
    /// Create a record stamped with the current UTC time
    pub fn new(status: WordStatus, source: String, translation: Option<String>) -> Self {
        VocabularyRecord {
            status,
            source,
            dt: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            translation,
        }
    }
}

/// Word-to-record mapping, loaded wholesale at start and rewritten wholesale
/// after every single classification.
///
/// The full-rewrite strategy trades performance for simplicity and
/// durability: a crash between classifications loses at most the in-memory
/// cursor, never a completed write.
#[derive(Debug)]
pub struct VocabularyDatabase {
    /// File the database is persisted to
    path: PathBuf,

    /// BTreeMap keeps keys sorted, so serialization is deterministic and diffable
    records: BTreeMap<String, VocabularyRecord>,
}

impl VocabularyDatabase {
    /// Load the database from a JSON file. A missing file is an empty
    /// database, not an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!("Database file {:?} not found, starting empty", path);
            return Ok(VocabularyDatabase {
                path,
                records: BTreeMap::new(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| DatabaseError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let records: BTreeMap<String, VocabularyRecord> =
            serde_json::from_str(&content).map_err(|source| DatabaseError::ParseFailed {
                path: path.display().to_string(),
                source,
            })?;

        debug!("Loaded {} vocabulary records from {:?}", records.len(), path);
        Ok(VocabularyDatabase { path, records })
    }

    /// Number of classified words
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the database holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a word has been classified
    pub fn contains(&self, word: &str) -> bool {
        self.records.contains_key(word)
    }

    /// Look up the record for a word
    pub fn get(&self, word: &str) -> Option<&VocabularyRecord> {
        self.records.get(word)
    }

    /// Words carrying a given status, in sorted order
    pub fn words_with_status(&self, status: WordStatus) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(_, record)| record.status == status)
            .map(|(word, _)| word.as_str())
            .collect()
    }

    /// Insert or overwrite the record for a word and persist immediately.
    ///
    /// The write fully completes before this returns, so the next prompt can
    /// never race a pending write.
    pub fn record(&mut self, word: &str, record: VocabularyRecord) -> Result<(), DatabaseError> {
        self.records.insert(word.to_string(), record);
        self.persist()
    }

    /// Rewrite the whole file: sorted keys, indented, UTF-8 so non-ASCII
    /// translations survive round-trips.
    fn persist(&self) -> Result<(), DatabaseError> {
        let json = serde_json::to_string_pretty(&self.records).map_err(|source| {
            DatabaseError::ParseFailed {
                path: self.path.display().to_string(),
                source,
            }
        })?;

        std::fs::write(&self.path, json).map_err(|source| DatabaseError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        })
    }
}
