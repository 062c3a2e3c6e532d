//! Tagged tokens produced by a tagger.
//!
//! A [`Token`] is one word of the input sentence together with the
//! part-of-speech tags a tagger assigned to it. A [`TaggedSentence`] is the
//! ordered token stream threaded from stage to stage of the gloss pipeline.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A part-of-speech tag.
///
/// Only adjective and noun tags drive reordering; the remaining variants are
/// carried through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Adjective (also parsed from `Adj`).
    Adjective,
    /// Noun.
    Noun,
    /// Singular noun.
    Singular,
    /// Plural noun.
    Plural,
    /// Pronoun.
    Pronoun,
    /// Verb.
    Verb,
    /// Article or other determiner.
    Determiner,
    /// Any label outside the controlled vocabulary.
    Other(String),
}

impl Tag {
    /// Returns true for tags that mark a noun (`Noun`, `Singular`, `Plural`).
    #[must_use]
    pub const fn is_nominal(&self) -> bool {
        matches!(self, Self::Noun | Self::Singular | Self::Plural)
    }
}

impl FromStr for Tag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "adjective" | "adj" => Self::Adjective,
            "noun" => Self::Noun,
            "singular" => Self::Singular,
            "plural" => Self::Plural,
            "pronoun" => Self::Pronoun,
            "verb" => Self::Verb,
            "determiner" | "article" => Self::Determiner,
            _ => Self::Other(s.trim().to_string()),
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adjective => write!(f, "Adjective"),
            Self::Noun => write!(f, "Noun"),
            Self::Singular => write!(f, "Singular"),
            Self::Plural => write!(f, "Plural"),
            Self::Pronoun => write!(f, "Pronoun"),
            Self::Verb => write!(f, "Verb"),
            Self::Determiner => write!(f, "Determiner"),
            Self::Other(label) => write!(f, "{label}"),
        }
    }
}

/// One word of a tagged sentence.
///
/// Immutable once built: the builder methods consume and return the token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    text: String,
    tags: BTreeSet<Tag>,
}

impl Token {
    /// Creates an untagged token with the given surface text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Adds several tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Surface text as the tagger saw it.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Assigned tags.
    #[must_use]
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Checks for a specific tag.
    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// True if tagged as an adjective.
    #[must_use]
    pub fn is_adjective(&self) -> bool {
        self.has_tag(&Tag::Adjective)
    }

    /// True if tagged as a noun, singular, or plural.
    #[must_use]
    pub fn is_noun(&self) -> bool {
        self.tags.iter().any(Tag::is_nominal)
    }

    /// Lowercased, trimmed surface text.
    #[must_use]
    pub fn lower(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)?;
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(ToString::to_string).collect();
            write!(f, "/{}", tags.join("+"))?;
        }
        Ok(())
    }
}

/// An ordered stream of tagged tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaggedSentence {
    tokens: Vec<Token>,
}

impl TaggedSentence {
    /// Creates a sentence from tokens.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Lowercased surface words, blanks dropped.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(Token::lower)
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Returns a new sentence keeping only tokens for which `keep` is true.
    ///
    /// # Panics
    ///
    /// Panics if `keep` is shorter than the sentence.
    #[must_use]
    pub fn retain_mask(&self, keep: &[bool]) -> Self {
        assert!(keep.len() >= self.tokens.len(), "mask shorter than sentence");
        self.tokens
            .iter()
            .zip(keep)
            .filter(|(_, k)| **k)
            .map(|(t, _)| t.clone())
            .collect()
    }
}

impl FromIterator<Token> for TaggedSentence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TaggedSentence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaggedSentence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TaggedSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.tokens.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(" "))
    }
}
