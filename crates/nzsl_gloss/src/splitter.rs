//! Fallback word splitting.
//!
//! Used when no tagger is available or the tagged pipeline comes up empty.
//! Purely lexical: no tags, no reordering.

use nzsl_foundation::{Lexicon, WordPattern};

/// Lowercases, strips punctuation, splits on whitespace, drops grammar words.
#[derive(Clone, Debug)]
pub struct BasicSplitter {
    stop_words: WordPattern,
}

impl BasicSplitter {
    /// Creates a splitter using the lexicon's grammar words as stop words.
    #[must_use]
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            stop_words: lexicon.grammar_words().clone(),
        }
    }

    /// Splits text into gloss words. Never fails; may return nothing.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| !self.stop_words.contains_word(word))
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for BasicSplitter {
    fn default() -> Self {
        Self::new(&Lexicon::nzsl())
    }
}
