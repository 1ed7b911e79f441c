use std::collections::HashMap;

use log::debug;

// @module: Contraction expansion, word scanning and frequency counting

/// Ordered contraction-expansion table.
///
/// Applied as sequential literal substring replacements over the whole text,
/// top to bottom. Order is semantic: specific forms ("didn't") must come
/// before the generic fallbacks ("n't") that would otherwise mangle them.
/// This is a fixed apply-all-in-order policy, not longest-match.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("who's", "who is"),
    ("'l", " will"),
    ("'re", " are"),
    ("don't", "do not"),
    ("it's", "it is"),
    ("haven't", "have not"),
    ("didn't", "did not"),
    ("i'm", "i am"),
    ("i'd", "i would"),
    ("should've", "should have"),
    ("that's", "that is"),
    ("doesn't", "does not"),
    ("hadn't", "had not"),
    ("wasn't", "was not"),
    ("i've", "i have"),
    ("'cause", "because"),
    ("could've", "could have"),
    ("you've", "you have"),
    ("isn't", "is not"),
    ("why'd", "why would"),
    ("'s", ""),
    ("'ve", " have"),
    ("n't", " not"),
];

/// A word paired with its occurrence count within one source file.
/// Built fresh per run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStat {
    /// Lowercase alphabetic word
    pub word: String,

    /// Number of occurrences in the extracted text
    pub count: usize,
}

/// Scanner state for the character walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Between words, skipping non-alphabetic characters
    Searching,
    /// Accumulating consecutive alphabetic characters
    InWord,
}

/// Tokenizer with a configurable minimum word length
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Words are kept only when their length exceeds this threshold
    min_word_length: usize,
}

impl Tokenizer {
    /// Create a tokenizer keeping words longer than `min_word_length`
    pub fn new(min_word_length: usize) -> Self {
        Tokenizer { min_word_length }
    }

    /// Apply the contraction table to lowercase text, in table order
    pub fn expand_contractions(text: &str) -> String {
        let mut expanded = text.to_string();
        for (pattern, replacement) in CONTRACTIONS {
            expanded = expanded.replace(pattern, replacement);
        }
        expanded
    }

    /// Scan text into alphabetic tokens.
    ///
    /// Digits, punctuation and any apostrophes left after expansion all act
    /// as separators; an in-progress token is flushed whenever one appears.
    pub fn scan_words(text: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut buffer = String::new();
        let mut state = ScanState::Searching;

        for c in text.chars() {
            if c.is_alphabetic() {
                buffer.push(c);
                state = ScanState::InWord;
            } else if state == ScanState::InWord {
                words.push(std::mem::take(&mut buffer));
                state = ScanState::Searching;
            }
        }

        if state == ScanState::InWord {
            words.push(buffer);
        }

        words
    }

    /// Compute the review list for a text blob: expand contractions, scan,
    /// count, drop words at or below the length threshold, and sort
    /// lexicographically. The result is stable for the duration of one run.
    pub fn word_stats(&self, text: &str) -> Vec<WordStat> {
        let expanded = Self::expand_contractions(text);
        let words = Self::scan_words(&expanded);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }

        let mut stats: Vec<WordStat> = counts
            .into_iter()
            .filter(|(word, _)| word.chars().count() > self.min_word_length)
            .map(|(word, count)| WordStat { word, count })
            .collect();

        stats.sort_by(|a, b| a.word.cmp(&b.word));

        debug!("Tokenized {} distinct words above length {}", stats.len(), self.min_word_length);
        stats
    }
}
