//! Individual stages of the gloss pipeline.
//!
//! Every fallible stage returns `Result<_, StageFault>`. The driver in
//! [`crate::reorderer`] substitutes the stage's identity output on a fault and
//! carries on; nothing here decides policy.

use std::fmt;

use nzsl_foundation::{Error, Lexicon, TaggedSentence, Token, WordPattern};

use crate::tagger::Tagger;

/// Pipeline stage identifiers, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Tagging the whole sentence.
    Tagging,
    /// Pulling time words to the front.
    TimeExtraction,
    /// Detecting and removing negation.
    NegativeExtraction,
    /// Dropping grammar words.
    GrammarElision,
    /// Swapping adjective-noun pairs.
    Transposition,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tagging => "tagging",
            Self::TimeExtraction => "time extraction",
            Self::NegativeExtraction => "negative extraction",
            Self::GrammarElision => "grammar elision",
            Self::Transposition => "transposition",
        };
        write!(f, "{name}")
    }
}

/// A failure confined to one stage.
#[derive(Debug)]
pub struct StageFault {
    /// The stage that failed.
    pub stage: Stage,
    /// What went wrong.
    pub error: Error,
}

impl StageFault {
    /// Creates a fault for a stage.
    #[must_use]
    pub fn new(stage: Stage, error: Error) -> Self {
        Self { stage, error }
    }
}

impl fmt::Display for StageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.error)
    }
}

impl std::error::Error for StageFault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Output of a match-and-remove stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    /// Matched surface strings, lowercased and trimmed, blanks dropped.
    pub matches: Vec<String>,
    /// The sentence with matches removed.
    pub remaining: TaggedSentence,
}

impl Extraction {
    /// The no-op result: nothing matched, nothing removed.
    #[must_use]
    pub fn identity(sentence: &TaggedSentence) -> Self {
        Self {
            matches: Vec::new(),
            remaining: sentence.clone(),
        }
    }
}

/// Finds and removes every match of `pattern`.
///
/// Both tagger calls must succeed for the stage to take effect.
///
/// # Errors
///
/// Returns a fault tagged with `stage` if either tagger call fails.
pub fn extract(
    stage: Stage,
    tagger: &dyn Tagger,
    sentence: &TaggedSentence,
    pattern: &WordPattern,
) -> Result<Extraction, StageFault> {
    let fault = |error| StageFault::new(stage, error);
    let matches = tagger
        .find_matches(sentence, pattern)
        .map_err(fault)?
        .into_iter()
        .map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect();
    let remaining = tagger.remove_matches(sentence, pattern).map_err(fault)?;
    Ok(Extraction { matches, remaining })
}

/// Stage 1: time words.
///
/// # Errors
///
/// Returns a fault if matching or removal fails.
pub fn extract_time(
    tagger: &dyn Tagger,
    sentence: &TaggedSentence,
    lexicon: &Lexicon,
) -> Result<Extraction, StageFault> {
    extract(Stage::TimeExtraction, tagger, sentence, lexicon.time_words())
}

/// Stage 2: negation. Only presence is reported.
///
/// # Errors
///
/// Returns a fault if matching or removal fails.
pub fn extract_negative(
    tagger: &dyn Tagger,
    sentence: &TaggedSentence,
    lexicon: &Lexicon,
) -> Result<(bool, TaggedSentence), StageFault> {
    let extraction = extract(Stage::NegativeExtraction, tagger, sentence, lexicon.negatives())?;
    Ok((!extraction.matches.is_empty(), extraction.remaining))
}

/// Stage 3: grammar words.
///
/// # Errors
///
/// Returns a fault if removal fails.
pub fn elide_grammar(
    tagger: &dyn Tagger,
    sentence: &TaggedSentence,
    lexicon: &Lexicon,
) -> Result<TaggedSentence, StageFault> {
    tagger
        .remove_matches(sentence, lexicon.grammar_words())
        .map_err(|e| StageFault::new(Stage::GrammarElision, e))
}

/// Stage 4: adjective-noun transposition.
///
/// One greedy pass with a single token of lookahead. An adjective directly
/// followed by a noun is emitted after it; nothing else moves.
///
/// # Errors
///
/// Returns a fault if any token is blank or holds more than one word.
pub fn transpose(sentence: &TaggedSentence) -> Result<Vec<String>, StageFault> {
    let tokens = sentence.tokens();
    if let Some(bad) = tokens.iter().find(|t| !is_single_word(t)) {
        return Err(StageFault::new(
            Stage::Transposition,
            Error::malformed_tags(format!("token {:?} is not a single word", bad.text())),
        ));
    }

    let mut core = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let current = &tokens[i];
        match tokens.get(i + 1) {
            Some(next) if current.is_adjective() && next.is_noun() => {
                core.push(next.lower());
                core.push(current.lower());
                i += 2;
            }
            _ => {
                core.push(current.lower());
                i += 1;
            }
        }
    }
    Ok(core)
}

/// Transposition fallback: the lowercase words verbatim, tags ignored.
#[must_use]
pub fn untagged_words(sentence: &TaggedSentence) -> Vec<String> {
    sentence
        .iter()
        .flat_map(|t| t.text().split_whitespace())
        .map(str::to_lowercase)
        .collect()
}

/// Stage 5: pronoun canonicalization. Cannot fail.
#[must_use]
pub fn canonicalize_pronouns(words: &[String], lexicon: &Lexicon) -> Vec<String> {
    words
        .iter()
        .map(|w| lexicon.canonical_pronoun(w))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Stage 6: Time, then core, then a single trailing `not`.
#[must_use]
pub fn assemble(time: &[String], core: &[String], negative: bool) -> Vec<String> {
    let mut gloss: Vec<String> = time
        .iter()
        .chain(core)
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    if negative {
        gloss.push("not".to_string());
    }
    gloss
}

fn is_single_word(token: &Token) -> bool {
    let text = token.text().trim();
    !text.is_empty() && !text.contains(char::is_whitespace)
}
