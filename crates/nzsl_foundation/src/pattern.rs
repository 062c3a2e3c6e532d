//! Closed word patterns.
//!
//! A [`WordPattern`] is an alternation of words or short phrases, matched
//! case-insensitively against normalized words. Punctuation is ignored when
//! normalizing, so `"didn't"` matches the pattern word `didnt`.

use std::ops::Range;

use im::HashSet;

/// Normalizes a word for matching.
///
/// Lowercases and removes every character that is not alphanumeric or `_`.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// An immutable set of words and phrases to match against a token stream.
///
/// Cloning is cheap; the phrase set is a persistent collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordPattern {
    phrases: HashSet<Vec<String>>,
    max_len: usize,
}

impl WordPattern {
    /// Creates an empty pattern that matches nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pattern from words or space-separated phrases.
    ///
    /// Entries that normalize to nothing are skipped.
    #[must_use]
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .fold(Self::new(), |pattern, entry| pattern.with(entry.as_ref()))
    }

    /// Returns a new pattern that also matches `entry`.
    #[must_use]
    pub fn with(&self, entry: &str) -> Self {
        let phrase: Vec<String> = entry
            .split_whitespace()
            .map(normalize_word)
            .filter(|w| !w.is_empty())
            .collect();
        if phrase.is_empty() {
            return self.clone();
        }
        Self {
            max_len: self.max_len.max(phrase.len()),
            phrases: self.phrases.update(phrase),
        }
    }

    /// Returns a new pattern matching everything in either pattern.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            phrases: self.phrases.clone().union(other.phrases.clone()),
            max_len: self.max_len.max(other.max_len),
        }
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// True if the pattern matches nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Length in words of the longest phrase.
    #[must_use]
    pub fn max_phrase_len(&self) -> usize {
        self.max_len
    }

    /// Checks whether a single word is an entry of this pattern.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        let normal = normalize_word(word);
        !normal.is_empty() && self.phrases.contains([normal].as_slice())
    }

    /// Finds every match in `words`, left to right.
    ///
    /// At each position the longest matching phrase wins, and matches never
    /// overlap. Returned ranges index into `words`.
    #[must_use]
    pub fn spans<S: AsRef<str>>(&self, words: &[S]) -> Vec<Range<usize>> {
        let normal: Vec<String> = words.iter().map(|w| normalize_word(w.as_ref())).collect();
        let mut spans = Vec::new();
        let mut i = 0;

        while i < normal.len() {
            let longest = (1..=self.max_len.min(normal.len() - i))
                .rev()
                .find(|&len| {
                    let window = &normal[i..i + len];
                    window.iter().all(|w| !w.is_empty()) && self.phrases.contains(window)
                });

            match longest {
                Some(len) => {
                    spans.push(i..i + len);
                    i += len;
                }
                None => i += 1,
            }
        }

        spans
    }

    /// All entries as space-joined phrases, sorted.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = self.phrases.iter().map(|p| p.join(" ")).collect();
        entries.sort();
        entries
    }
}
