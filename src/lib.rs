/*!
 * # subvocab - subtitle vocabulary review
 *
 * A Rust library for building a personal vocabulary from subtitle files.
 *
 * ## Features
 *
 * - Extract spoken text from subtitle cue blocks with a lenient parser
 * - Expand contractions and count word frequencies
 * - Persist word classifications to a human-diffable JSON database
 * - Interactive single-keystroke review loop with back navigation,
 *   context lookup and on-demand machine translation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_extractor`: Cue parsing and spoken-text extraction
 * - `tokenizer`: Contraction expansion, word scanning and counting
 * - `vocabulary_db`: Persisted word-classification database
 * - `session`: Interactive review loop:
 *   - `session::controller`: Cursor, skip rule and command dispatch
 *   - `session::input`: Keystroke sources (terminal and scripted)
 * - `translation_client`: Machine-translation HTTP client
 * - `terminal`: Raw-mode keystroke reading and color codes
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod file_utils;
pub mod session;
pub mod subtitle_extractor;
pub mod terminal;
pub mod tokenizer;
pub mod translation_client;
pub mod vocabulary_db;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, DatabaseError, ProviderError};
pub use session::{SessionController, SessionOutcome};
pub use subtitle_extractor::{Cue, SubtitleExtractor};
pub use tokenizer::{Tokenizer, WordStat};
pub use translation_client::{HttpTranslator, MockTranslator, Translator};
pub use vocabulary_db::{VocabularyDatabase, VocabularyRecord, WordStatus};
