//! Vocabulary registry for the lexicon tagger.
//!
//! Stores adjectives, nouns, pronouns, determiners, and verbs, and assigns
//! tags to words by closed-list lookup with suffix heuristics as a fallback.

use std::collections::{BTreeSet, HashSet};

use nzsl_foundation::Tag;

use crate::english;

/// Letters that must precede a suffix for the suffix rule to apply.
const MIN_STEM_LEN: usize = 3;

/// Runtime storage for word categories.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    adjectives: HashSet<String>,
    nouns: HashSet<String>,
    pronouns: HashSet<String>,
    determiners: HashSet<String>,
    verbs: HashSet<String>,
    adjective_suffixes: Vec<String>,
    noun_suffixes: Vec<String>,
}

impl Vocabulary {
    /// Creates a new empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English vocabulary.
    #[must_use]
    pub fn english() -> Self {
        let mut vocab = Self::new();
        english::ADJECTIVES.iter().for_each(|w| vocab.register_adjective(w));
        english::NOUNS.iter().for_each(|w| vocab.register_noun(w));
        english::PRONOUNS.iter().for_each(|w| vocab.register_pronoun(w));
        english::DETERMINERS.iter().for_each(|w| vocab.register_determiner(w));
        english::VERBS.iter().for_each(|w| vocab.register_verb(w));
        vocab.adjective_suffixes = english::ADJECTIVE_SUFFIXES.iter().map(ToString::to_string).collect();
        vocab.noun_suffixes = english::NOUN_SUFFIXES.iter().map(ToString::to_string).collect();
        vocab
    }

    /// Registers an adjective.
    pub fn register_adjective(&mut self, word: &str) {
        self.adjectives.insert(word.to_lowercase());
    }

    /// Registers a noun.
    pub fn register_noun(&mut self, word: &str) {
        self.nouns.insert(word.to_lowercase());
    }

    /// Registers a pronoun.
    pub fn register_pronoun(&mut self, word: &str) {
        self.pronouns.insert(word.to_lowercase());
    }

    /// Registers a determiner.
    pub fn register_determiner(&mut self, word: &str) {
        self.determiners.insert(word.to_lowercase());
    }

    /// Registers a verb.
    pub fn register_verb(&mut self, word: &str) {
        self.verbs.insert(word.to_lowercase());
    }

    /// Checks if a word is a registered adjective.
    #[must_use]
    pub fn is_adjective(&self, word: &str) -> bool {
        self.adjectives.contains(&word.to_lowercase())
    }

    /// Checks if a word is a registered noun.
    #[must_use]
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains(&word.to_lowercase())
    }

    /// Assigns tags to a single word.
    ///
    /// Lookup order:
    /// 1. Closed lists (a word may sit in several)
    /// 2. Plural of a known noun (`apples`)
    /// 3. Suffix heuristics, only when nothing above matched
    #[must_use]
    pub fn tags_for(&self, word: &str) -> BTreeSet<Tag> {
        let lower = word.to_lowercase();
        let mut tags = BTreeSet::new();

        if self.adjectives.contains(&lower) {
            tags.insert(Tag::Adjective);
        }
        if self.nouns.contains(&lower) {
            tags.insert(Tag::Noun);
            tags.insert(Tag::Singular);
        }
        if self.pronouns.contains(&lower) {
            tags.insert(Tag::Pronoun);
        }
        if self.determiners.contains(&lower) {
            tags.insert(Tag::Determiner);
        }
        if self.verbs.contains(&lower) {
            tags.insert(Tag::Verb);
        }
        if !tags.is_empty() {
            return tags;
        }

        if self.plural_of_known_noun(&lower) {
            tags.insert(Tag::Noun);
            tags.insert(Tag::Plural);
            return tags;
        }

        if Self::has_suffix(&lower, &self.adjective_suffixes) {
            tags.insert(Tag::Adjective);
        } else if Self::has_suffix(&lower, &self.noun_suffixes) {
            tags.insert(Tag::Noun);
        }
        tags
    }

    fn plural_of_known_noun(&self, lower: &str) -> bool {
        if let Some(stem) = lower.strip_suffix("es") {
            if self.nouns.contains(stem) {
                return true;
            }
        }
        lower
            .strip_suffix('s')
            .is_some_and(|stem| self.nouns.contains(stem))
    }

    fn has_suffix(word: &str, suffixes: &[String]) -> bool {
        suffixes.iter().any(|suffix| {
            word.strip_suffix(suffix.as_str())
                .is_some_and(|stem| stem.chars().count() >= MIN_STEM_LEN)
        })
    }
}
