//! Word lists that drive NZSL reordering.
//!
//! A [`Lexicon`] bundles the time words, negation markers, grammar words, and
//! pronoun groups. It is immutable configuration: built once (from the
//! built-in NZSL lists or a JSON override) and injected into the reorderer.

use std::collections::BTreeMap;

use im::HashMap;
use serde::Deserialize;

use crate::error::{Error, ErrorContext, Result};
use crate::pattern::WordPattern;

/// Words that place a sign at the start of the NZSL clause.
pub const TIME_WORDS: &[&str] = &[
    "tomorrow",
    "yesterday",
    "today",
    "tonight",
    "later",
    "soon",
    "now",
    "morning",
    "afternoon",
    "evening",
    "night",
    "week",
    "month",
    "year",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Negation markers, written without apostrophes.
pub const NEGATIVES: &[&str] = &[
    "not", "no", "never", "didnt", "dont", "cant", "cannot", "wont", "isnt", "arent", "wasnt",
    "werent",
];

/// Function words with no sign equivalent.
pub const GRAMMAR_WORDS: &[&str] = &[
    "a", "an", "the", "is", "am", "are", "was", "were", "be", "been", "being", "to", "will",
    "would", "could", "should", "have", "has", "had", "do", "does", "did", "may", "might", "must",
    "shall",
];

/// Pronoun groups as `(canonical, variants)`.
pub const PRONOUNS: &[(&str, &[&str])] = &[
    ("me", &["i", "my", "mine"]),
    ("you", &["your", "yours"]),
    ("he", &["him", "his"]),
    ("she", &["her", "hers"]),
    ("we", &["us", "our", "ours"]),
    ("they", &["them", "their", "theirs"]),
];

/// The closed word lists used by the gloss pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicon {
    time_words: WordPattern,
    negatives: WordPattern,
    grammar_words: WordPattern,
    /// Lowercased variant -> canonical form. Canonical forms map to themselves.
    pronouns: HashMap<String, String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::nzsl()
    }
}

impl Lexicon {
    /// A lexicon with no entries at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            time_words: WordPattern::new(),
            negatives: WordPattern::new(),
            grammar_words: WordPattern::new(),
            pronouns: HashMap::new(),
        }
    }

    /// The built-in NZSL word lists.
    #[must_use]
    pub fn nzsl() -> Self {
        let lexicon = Self {
            time_words: WordPattern::from_words(TIME_WORDS),
            negatives: WordPattern::from_words(NEGATIVES),
            grammar_words: WordPattern::from_words(GRAMMAR_WORDS),
            pronouns: HashMap::new(),
        };
        PRONOUNS
            .iter()
            .fold(lexicon, |lex, (canonical, variants)| {
                lex.with_pronoun_group(canonical, variants.iter().copied())
            })
    }

    /// Time word pattern.
    #[must_use]
    pub fn time_words(&self) -> &WordPattern {
        &self.time_words
    }

    /// Negation marker pattern.
    #[must_use]
    pub fn negatives(&self) -> &WordPattern {
        &self.negatives
    }

    /// Grammar word pattern.
    #[must_use]
    pub fn grammar_words(&self) -> &WordPattern {
        &self.grammar_words
    }

    /// True if `word` is a grammar word.
    #[must_use]
    pub fn is_grammar_word(&self, word: &str) -> bool {
        self.grammar_words.contains_word(word)
    }

    /// Replaces the time word pattern.
    #[must_use]
    pub fn with_time_words(mut self, pattern: WordPattern) -> Self {
        self.time_words = pattern;
        self
    }

    /// Replaces the negation pattern.
    #[must_use]
    pub fn with_negatives(mut self, pattern: WordPattern) -> Self {
        self.negatives = pattern;
        self
    }

    /// Replaces the grammar word pattern.
    #[must_use]
    pub fn with_grammar_words(mut self, pattern: WordPattern) -> Self {
        self.grammar_words = pattern;
        self
    }

    /// Adds a pronoun group. The canonical form always maps to itself.
    #[must_use]
    pub fn with_pronoun_group<I, S>(mut self, canonical: &str, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = canonical.trim().to_lowercase();
        if canonical.is_empty() {
            return self;
        }
        for variant in variants {
            let variant = variant.as_ref().trim().to_lowercase();
            if !variant.is_empty() {
                self.pronouns.insert(variant, canonical.clone());
            }
        }
        self.pronouns.insert(canonical.clone(), canonical);
        self
    }

    /// Removes all pronoun groups.
    #[must_use]
    pub fn without_pronouns(mut self) -> Self {
        self.pronouns = HashMap::new();
        self
    }

    /// Maps a pronoun variant to its canonical form; other words pass through.
    #[must_use]
    pub fn canonical_pronoun(&self, word: &str) -> String {
        let lower = word.trim().to_lowercase();
        match self.pronouns.get(&lower) {
            Some(canonical) => canonical.clone(),
            None => lower,
        }
    }

    /// Number of pronoun variants known (canonical forms included).
    #[must_use]
    pub fn pronoun_count(&self) -> usize {
        self.pronouns.len()
    }

    /// Checks that pronoun canonicalization is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLexicon` if a canonical form is itself remapped.
    pub fn validate(&self) -> Result<()> {
        for (variant, canonical) in &self.pronouns {
            match self.pronouns.get(canonical) {
                Some(target) if target == canonical => {}
                Some(target) => {
                    return Err(Error::invalid_lexicon(format!(
                        "pronoun '{variant}' maps to '{canonical}', which maps on to '{target}'"
                    )));
                }
                None => {
                    return Err(Error::invalid_lexicon(format!(
                        "canonical pronoun '{canonical}' is not registered"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Applies a JSON override to this lexicon.
    ///
    /// Keys present in the document replace the corresponding list; missing
    /// keys keep the current values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLexicon` if the JSON is malformed or the resulting
    /// pronoun groups are inconsistent.
    pub fn with_json_overrides(self, source: &str, json: &str) -> Result<Self> {
        let spec: LexiconSpec = serde_json::from_str(json).map_err(|e| {
            Error::invalid_lexicon(e.to_string()).with_context(
                ErrorContext::new()
                    .with_source(source)
                    .with_position(e.line(), e.column()),
            )
        })?;
        let lexicon = spec.apply(self);
        lexicon
            .validate()
            .map_err(|e| e.with_context(ErrorContext::new().with_source(source)))?;
        Ok(lexicon)
    }
}

/// On-disk lexicon override.
///
/// ```json
/// { "time_words": ["tomorrow", "next week"],
///   "pronouns": { "me": ["i", "my", "mine"] } }
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconSpec {
    /// Replacement time words.
    #[serde(default)]
    pub time_words: Option<Vec<String>>,
    /// Replacement negation markers.
    #[serde(default)]
    pub negatives: Option<Vec<String>>,
    /// Replacement grammar words.
    #[serde(default)]
    pub grammar_words: Option<Vec<String>>,
    /// Replacement pronoun groups, canonical form to variants.
    #[serde(default)]
    pub pronouns: Option<BTreeMap<String, Vec<String>>>,
}

impl LexiconSpec {
    /// Applies this override on top of `base`.
    #[must_use]
    pub fn apply(self, base: Lexicon) -> Lexicon {
        let mut lexicon = base;
        if let Some(words) = self.time_words {
            lexicon = lexicon.with_time_words(WordPattern::from_words(words));
        }
        if let Some(words) = self.negatives {
            lexicon = lexicon.with_negatives(WordPattern::from_words(words));
        }
        if let Some(words) = self.grammar_words {
            lexicon = lexicon.with_grammar_words(WordPattern::from_words(words));
        }
        if let Some(groups) = self.pronouns {
            lexicon = groups
                .iter()
                .fold(lexicon.without_pronouns(), |lex, (canonical, variants)| {
                    lex.with_pronoun_group(canonical, variants)
                });
        }
        lexicon
    }
}
