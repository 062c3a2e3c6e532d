//! Part-of-speech tagger capability.
//!
//! The gloss pipeline does not tag words itself. It talks to a [`Tagger`],
//! which may be backed by anything that can label words and that may be
//! missing entirely ([`UnavailableTagger`]).

use nzsl_foundation::{Error, Result, TaggedSentence, Token, WordPattern};

/// A pluggable tagging capability.
///
/// `find_matches` and `remove_matches` have lexical default implementations;
/// a tagger with its own notion of matching can override them. Each call may
/// fail on its own without affecting the others.
pub trait Tagger: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Whether this tagger can be used at all.
    ///
    /// Checked once when a reorderer is built.
    fn is_available(&self) -> bool {
        true
    }

    /// Tags a whole sentence.
    ///
    /// # Errors
    ///
    /// Returns an error if the sentence cannot be tagged.
    fn tag(&self, sentence: &str) -> Result<TaggedSentence>;

    /// Returns the surface text of every match of `pattern`, in order.
    ///
    /// Multi-word matches are joined with a single space.
    ///
    /// # Errors
    ///
    /// Returns an error if matching fails.
    fn find_matches(&self, sentence: &TaggedSentence, pattern: &WordPattern) -> Result<Vec<String>> {
        let texts: Vec<&str> = sentence.iter().map(Token::text).collect();
        Ok(pattern
            .spans(&texts)
            .into_iter()
            .map(|span| texts[span].join(" "))
            .collect())
    }

    /// Returns a new sentence with every match of `pattern` removed.
    ///
    /// # Errors
    ///
    /// Returns an error if matching fails.
    fn remove_matches(
        &self,
        sentence: &TaggedSentence,
        pattern: &WordPattern,
    ) -> Result<TaggedSentence> {
        let texts: Vec<&str> = sentence.iter().map(Token::text).collect();
        let mut keep = vec![true; texts.len()];
        for span in pattern.spans(&texts) {
            keep[span].fill(false);
        }
        Ok(sentence.retain_mask(&keep))
    }
}

/// The absent tagger.
///
/// Reports itself unavailable and refuses to tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTagger;

impl Tagger for UnavailableTagger {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn tag(&self, _sentence: &str) -> Result<TaggedSentence> {
        Err(Error::tagger_unavailable())
    }
}
