//! Degradation when the tagger is missing or a stage fails

use std::sync::Arc;

use nzsl_foundation::{Error, Result, Tag, TaggedSentence, Token, WordPattern};
use nzsl_gloss::{
    BasicSplitter, GlossPath, GlossReorderer, LexiconTagger, Stage, Tagger, UnavailableTagger,
};

/// Tags with the built-in vocabulary but cannot match patterns.
struct NoMatchTagger(LexiconTagger);

impl Tagger for NoMatchTagger {
    fn name(&self) -> &str {
        "no-match"
    }

    fn tag(&self, sentence: &str) -> Result<TaggedSentence> {
        self.0.tag(sentence)
    }

    fn find_matches(&self, _: &TaggedSentence, _: &WordPattern) -> Result<Vec<String>> {
        Err(Error::pattern_match_failed("matcher offline"))
    }
}

/// Always fails to tag.
struct BrokenTagger;

impl Tagger for BrokenTagger {
    fn name(&self) -> &str {
        "broken"
    }

    fn tag(&self, _: &str) -> Result<TaggedSentence> {
        Err(Error::tagging_failed("model crashed"))
    }
}

/// Returns a multi-word token, which transposition cannot handle.
struct ChunkingTagger;

impl Tagger for ChunkingTagger {
    fn name(&self) -> &str {
        "chunking"
    }

    fn tag(&self, _: &str) -> Result<TaggedSentence> {
        Ok(TaggedSentence::new(vec![
            Token::new("I").with_tag(Tag::Pronoun),
            Token::new("like").with_tag(Tag::Verb),
            Token::new("ice cream").with_tag(Tag::Noun),
        ]))
    }
}

const SENTENCES: &[&str] = &[
    "I am not going tomorrow",
    "the red apple is big",
    "the is a",
    "Kia ora, whānau!",
    "",
];

#[test]
fn absent_tagger_equals_basic_split() {
    let reorderer = GlossReorderer::without_tagger();
    let splitter = BasicSplitter::default();
    assert!(!reorderer.has_tagger());
    for text in SENTENCES {
        assert_eq!(reorderer.gloss(text), splitter.split(text), "{text:?}");
        assert_eq!(reorderer.analyze(text).path, GlossPath::TaggerUnavailable);
    }
}

#[test]
fn unavailable_tagger_is_dropped_at_construction() {
    let reorderer = GlossReorderer::with_tagger(UnavailableTagger);
    assert!(!reorderer.has_tagger());
    assert_eq!(
        reorderer.gloss("I am not going tomorrow"),
        vec!["i", "not", "going", "tomorrow"]
    );
}

#[test]
fn tagging_failure_falls_back_to_split() {
    let reorderer = GlossReorderer::with_tagger(BrokenTagger);
    let analysis = reorderer.analyze("I am not going tomorrow");
    assert_eq!(analysis.path, GlossPath::TaggingFailed);
    assert_eq!(analysis.gloss, vec!["i", "not", "going", "tomorrow"]);
    assert_eq!(analysis.faults.len(), 1);
    assert_eq!(analysis.faults[0].stage, Stage::Tagging);
}

#[test]
fn failed_stages_become_no_ops() {
    let reorderer = GlossReorderer::with_tagger(NoMatchTagger(LexiconTagger::english()));
    let analysis = reorderer.analyze("I am not going tomorrow");

    assert_eq!(analysis.path, GlossPath::Tagged);
    let stages: Vec<Stage> = analysis.faults.iter().map(|f| f.stage).collect();
    assert_eq!(
        stages,
        vec![Stage::TimeExtraction, Stage::NegativeExtraction, Stage::GrammarElision]
    );
    assert_eq!(analysis.gloss, vec!["me", "am", "not", "going", "tomorrow"]);
}

#[test]
fn malformed_tokens_skip_transposition() {
    let reorderer = GlossReorderer::with_tagger(ChunkingTagger);
    let analysis = reorderer.analyze("I like ice cream");
    assert!(analysis.faults.iter().any(|f| f.stage == Stage::Transposition));
    assert_eq!(analysis.gloss, vec!["me", "like", "ice", "cream"]);
}

#[test]
fn reorderer_is_shareable_across_threads() {
    let reorderer = Arc::new(GlossReorderer::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let reorderer = Arc::clone(&reorderer);
            std::thread::spawn(move || reorderer.gloss("I am not going tomorrow"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["tomorrow", "me", "going", "not"]);
    }
}
