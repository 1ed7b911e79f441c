use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;

use crate::file_utils::FileManager;
use crate::session::input::KeyInput;
use crate::terminal::{ACCENT, HIGHLIGHT, RESET};
use crate::tokenizer::WordStat;
use crate::translation_client::Translator;
use crate::vocabulary_db::{VocabularyDatabase, VocabularyRecord, WordStatus};

/// One-key commands accepted at the review prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Classify the current word
    Classify(WordStatus),
    /// Move back one word without writing
    Back,
    /// Show the first source line containing the word
    Context,
    /// Fetch a translation for the word
    Translate,
    /// End the session immediately
    Quit,
}

impl Command {
    /// Map a keystroke to a command; None means re-prompt
    pub fn from_key(key: char) -> Option<Command> {
        match key.to_ascii_lowercase() {
            'w' => Some(Command::Classify(WordStatus::NotAWord)),
            'n' => Some(Command::Classify(WordStatus::Name)),
            'y' => Some(Command::Classify(WordStatus::Known)),
            '?' => Some(Command::Classify(WordStatus::Unknown)),
            'b' => Some(Command::Back),
            'c' => Some(Command::Context),
            't' => Some(Command::Translate),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// How a review session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every word in the review list was visited
    ListExhausted,
    /// The user quit mid-list
    Quit,
}

/// Interactive controller walking the review list one word at a time.
///
/// All mutable session state (cursor, last step, pending translation) lives
/// here; the database write for each classification completes before the next
/// prompt is shown.
pub struct SessionController<I: KeyInput> {
    /// Sorted, deduplicated, length-filtered words; fixed for the whole run
    review_list: Vec<WordStat>,

    /// Persisted classifications, rewritten after every write
    database: VocabularyDatabase,

    /// Subtitle file being reviewed, used for context lookup
    source_path: PathBuf,

    /// File name recorded in each classification
    source_name: String,

    /// Index into the review list; starts before the first word
    cursor: isize,

    /// Translation fetched during the current word visit, stored with the
    /// classification and cleared on classify or back
    pending_translation: Option<String>,

    /// Keystroke source
    input: I,

    /// Translation client
    translator: Box<dyn Translator>,
}

impl<I: KeyInput> SessionController<I> {
    pub fn new(
        review_list: Vec<WordStat>,
        database: VocabularyDatabase,
        source_path: PathBuf,
        input: I,
        translator: Box<dyn Translator>,
    ) -> Self {
        let source_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| source_path.display().to_string());

        SessionController {
            review_list,
            database,
            source_path,
            source_name,
            cursor: -1,
            pending_translation: None,
            input,
            translator,
        }
    }

    /// Current cursor position, clamped at 0 for observers
    pub fn cursor(&self) -> usize {
        self.cursor.max(0) as usize
    }

    /// The database as updated by this session
    pub fn database(&self) -> &VocabularyDatabase {
        &self.database
    }

    /// Total and not-yet-classified word counts for the review list
    pub fn stats(&self) -> (usize, usize) {
        let total = self.review_list.len();
        let new = self
            .review_list
            .iter()
            .filter(|stat| !self.database.contains(&stat.word))
            .count();
        (total, new)
    }

    /// Run the review loop until the list is exhausted or the user quits.
    ///
    /// Navigation follows the step model: classification advances +1, back is
    /// -1, context and translate are 0. Words already in the database are
    /// skipped only while moving forward, so an interrupted session resumes
    /// where unclassified words begin while explicit back navigation still
    /// re-shows classified words.
    pub async fn run(&mut self) -> Result<SessionOutcome> {
        let (total, new) = self.stats();
        println!("Total words: {}, new words: {}", total, new);

        let mut step: isize = 1;
        loop {
            self.cursor = (self.cursor + step).max(0);
            if self.cursor as usize >= self.review_list.len() {
                println!("End of the list has been reached");
                return Ok(SessionOutcome::ListExhausted);
            }

            let word = self.review_list[self.cursor as usize].word.clone();

            // Skip rule: forward navigation only
            if self.database.contains(&word) && step > 0 {
                continue;
            }
            step = 1;

            println!("{}", word);
            match self.prompt()? {
                Command::Quit => {
                    debug!("Session quit at cursor {}", self.cursor);
                    return Ok(SessionOutcome::Quit);
                }
                Command::Back => {
                    self.pending_translation = None;
                    step = -1;
                }
                Command::Context => {
                    self.show_context(&word)?;
                    step = 0;
                }
                Command::Translate => {
                    self.translate(&word).await?;
                    step = 0;
                }
                Command::Classify(status) => {
                    self.classify(&word, status)?;
                }
            }
        }
    }

    /// Show the command menu and read keys until one maps to a command.
    /// Invalid keys just re-show the menu; they never consume a step.
    fn prompt(&mut self) -> Result<Command> {
        loop {
            println!(
                "[W] Not a word, [N] Name, [Y] Known word, [?] Not a known word, \
                 [B] Back, [C] Context, [T] Translate, [Q] Exit: "
            );
            let key = self.input.read_key()?;
            if let Some(command) = Command::from_key(key) {
                return Ok(command);
            }
        }
    }

    /// Write the classification, carrying any translation fetched during
    /// this visit, and persist before returning.
    fn classify(&mut self, word: &str, status: WordStatus) -> Result<()> {
        let record = VocabularyRecord::new(
            status,
            self.source_name.clone(),
            self.pending_translation.take(),
        );
        self.database
            .record(word, record)
            .with_context(|| format!("Failed to persist classification for '{}'", word))?;
        Ok(())
    }

    /// Print the first source line containing the word, with the match
    /// highlighted
    fn show_context(&self, word: &str) -> Result<()> {
        match FileManager::find_context_line(&self.source_path, word)? {
            Some(line) => println!("{}", highlight_match(&line, word)),
            None => println!("<Not found>"),
        }
        Ok(())
    }

    /// Fetch and display a translation, caching it for the current visit.
    /// A failed request is fatal to the session.
    async fn translate(&mut self, word: &str) -> Result<()> {
        let translation = self
            .translator
            .translate(word)
            .await
            .with_context(|| format!("Failed to translate '{}'", word))?;
        println!("{}{}{}", ACCENT, translation, RESET);
        self.pending_translation = Some(translation);
        Ok(())
    }
}

/// Wrap the first case-insensitive occurrence of `word` in `line` with
/// highlight escape codes. The line is returned unchanged when the word does
/// not occur (context lookup matched a different casing boundary).
fn highlight_match(line: &str, word: &str) -> String {
    let lower_line = line.to_lowercase();
    let lower_word = word.to_lowercase();

    match lower_line.find(&lower_word) {
        // Byte offsets come from the lowercased line; splice only when they
        // fall on char boundaries of the original
        Some(start)
            if start + lower_word.len() <= line.len()
                && line.is_char_boundary(start)
                && line.is_char_boundary(start + lower_word.len()) =>
        {
            let end = start + lower_word.len();
            format!(
                "{}{}{}{}{}",
                &line[..start],
                HIGHLIGHT,
                &line[start..end],
                RESET,
                &line[end..]
            )
        }
        _ => line.to_string(),
    }
}
