//! In-process tagger backed by a closed vocabulary.

use nzsl_foundation::{Result, TaggedSentence, Token};

use crate::tagger::Tagger;
use crate::tokenizer::SentenceTokenizer;
use crate::vocabulary::Vocabulary;

/// Tags words by vocabulary lookup.
///
/// Never fails: unknown words come back untagged.
#[derive(Clone, Debug)]
pub struct LexiconTagger {
    vocabulary: Vocabulary,
}

impl LexiconTagger {
    /// Creates a tagger over the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Creates a tagger over the built-in English vocabulary.
    #[must_use]
    pub fn english() -> Self {
        Self::new(Vocabulary::english())
    }

    /// The vocabulary in use.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Mutable access for registering extra words.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::english()
    }
}

impl Tagger for LexiconTagger {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn tag(&self, sentence: &str) -> Result<TaggedSentence> {
        Ok(SentenceTokenizer::tokenize(sentence)
            .into_iter()
            .map(|word| {
                let tags = self.vocabulary.tags_for(&word);
                Token::new(word).with_tags(tags)
            })
            .collect())
    }
}
