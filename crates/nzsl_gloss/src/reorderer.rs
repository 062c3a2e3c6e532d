//! Gloss reorderer pipeline.
//!
//! Orchestrates the full flow from English text to NZSL gloss order:
//! time words first, then the core with adjectives after their nouns, then a
//! single negation marker. Degrades to [`BasicSplitter`] rather than failing.

use std::fmt;
use std::sync::Arc;

use nzsl_foundation::Lexicon;
use tracing::{debug, info, warn};

use crate::lexicon_tagger::LexiconTagger;
use crate::splitter::BasicSplitter;
use crate::stage::{self, Extraction, Stage, StageFault};
use crate::tagger::Tagger;

/// Which route produced a gloss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlossPath {
    /// The tagged pipeline produced the result.
    Tagged,
    /// No tagger was configured; the basic splitter was used.
    TaggerUnavailable,
    /// Tagging the sentence failed; the basic splitter was used.
    TaggingFailed,
    /// The tagged pipeline produced nothing; the basic splitter was used.
    EmptyFallback,
}

impl fmt::Display for GlossPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tagged => "tagged",
            Self::TaggerUnavailable => "tagger unavailable",
            Self::TaggingFailed => "tagging failed",
            Self::EmptyFallback => "empty fallback",
        };
        write!(f, "{name}")
    }
}

/// The three partitions of a sentence after extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Time words in order of appearance.
    pub time_tokens: Vec<String>,
    /// Whether any negation marker was present.
    pub negative_found: bool,
    /// Remaining words after elision, transposition, and pronoun fixes.
    pub core_tokens: Vec<String>,
}

/// Everything the reorderer learned about one input.
#[derive(Debug)]
pub struct GlossAnalysis {
    /// The final gloss sequence.
    pub gloss: Vec<String>,
    /// Route taken.
    pub path: GlossPath,
    /// Partitions from the tagged pipeline, if it ran to completion.
    pub extraction: Option<ExtractionResult>,
    /// Stage faults absorbed along the way.
    pub faults: Vec<StageFault>,
}

/// Construction options for a [`GlossReorderer`].
#[derive(Clone, Debug)]
pub struct ReordererConfig {
    /// Word lists.
    pub lexicon: Lexicon,
    /// Whether to use the built-in lexicon tagger.
    pub use_tagger: bool,
}

impl Default for ReordererConfig {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::nzsl(),
            use_tagger: true,
        }
    }
}

impl ReordererConfig {
    /// Configuration that always uses the basic splitter.
    #[must_use]
    pub fn without_tagger() -> Self {
        Self {
            use_tagger: false,
            ..Self::default()
        }
    }

    /// Builder method to set the lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Builder method to enable/disable the lexicon tagger.
    #[must_use]
    pub fn with_tagger_enabled(mut self, enabled: bool) -> Self {
        self.use_tagger = enabled;
        self
    }
}

/// Converts English text to NZSL gloss order.
///
/// Holds only immutable data, so one instance can serve concurrent callers.
#[derive(Clone)]
pub struct GlossReorderer {
    lexicon: Lexicon,
    tagger: Option<Arc<dyn Tagger>>,
    splitter: BasicSplitter,
}

impl GlossReorderer {
    /// Creates a reorderer from a lexicon and an optional tagger.
    ///
    /// An unavailable tagger is dropped here, so later calls go straight to
    /// the basic splitter.
    #[must_use]
    pub fn new(lexicon: Lexicon, tagger: Option<Arc<dyn Tagger>>) -> Self {
        let tagger = match tagger {
            Some(t) if t.is_available() => {
                info!(tagger = t.name(), "gloss tagger available");
                Some(t)
            }
            Some(t) => {
                info!(tagger = t.name(), "gloss tagger unavailable, using basic splitter");
                None
            }
            None => {
                info!("no gloss tagger configured, using basic splitter");
                None
            }
        };
        Self {
            splitter: BasicSplitter::new(&lexicon),
            lexicon,
            tagger,
        }
    }

    /// Creates a reorderer with the given tagger and the built-in lexicon.
    #[must_use]
    pub fn with_tagger(tagger: impl Tagger + 'static) -> Self {
        Self::new(Lexicon::nzsl(), Some(Arc::new(tagger)))
    }

    /// Creates a reorderer that only uses the basic splitter.
    #[must_use]
    pub fn without_tagger() -> Self {
        Self::new(Lexicon::nzsl(), None)
    }

    /// Creates a reorderer from configuration.
    #[must_use]
    pub fn from_config(config: ReordererConfig) -> Self {
        let tagger: Option<Arc<dyn Tagger>> = if config.use_tagger {
            Some(Arc::new(LexiconTagger::english()))
        } else {
            None
        };
        Self::new(config.lexicon, tagger)
    }

    /// True if the tagged pipeline will be attempted.
    #[must_use]
    pub fn has_tagger(&self) -> bool {
        self.tagger.is_some()
    }

    /// The lexicon in use.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The fallback splitter.
    #[must_use]
    pub fn splitter(&self) -> &BasicSplitter {
        &self.splitter
    }

    /// Converts text to a gloss sequence. Never fails; may be empty.
    #[must_use]
    pub fn gloss(&self, text: &str) -> Vec<String> {
        self.analyze(text).gloss
    }

    /// Converts text and reports how the result was reached.
    #[must_use]
    pub fn analyze(&self, text: &str) -> GlossAnalysis {
        let Some(tagger) = self.tagger.as_deref() else {
            return self.fallback(text, GlossPath::TaggerUnavailable, None, Vec::new());
        };

        let sentence = match tagger.tag(text) {
            Ok(sentence) => sentence,
            Err(error) => {
                let fault = StageFault::new(Stage::Tagging, error);
                warn!(%fault, "falling back to basic splitter");
                return self.fallback(text, GlossPath::TaggingFailed, None, vec![fault]);
            }
        };
        debug!(%sentence, "tagged");

        let mut faults = Vec::new();

        let time = stage::extract_time(tagger, &sentence, &self.lexicon)
            .unwrap_or_else(|fault| absorb(&mut faults, fault, Extraction::identity(&sentence)));
        debug!(time = ?time.matches, "time words");

        let (negative_found, remaining) =
            stage::extract_negative(tagger, &time.remaining, &self.lexicon).unwrap_or_else(
                |fault| absorb(&mut faults, fault, (false, time.remaining.clone())),
            );
        debug!(negative_found, "negation");

        let remaining = stage::elide_grammar(tagger, &remaining, &self.lexicon)
            .unwrap_or_else(|fault| absorb(&mut faults, fault, remaining.clone()));

        let core = stage::transpose(&remaining)
            .unwrap_or_else(|fault| absorb(&mut faults, fault, stage::untagged_words(&remaining)));
        let core = stage::canonicalize_pronouns(&core, &self.lexicon);
        debug!(?core, "core");

        let gloss = stage::assemble(&time.matches, &core, negative_found);
        let extraction = ExtractionResult {
            time_tokens: time.matches,
            negative_found,
            core_tokens: core,
        };

        if gloss.is_empty() {
            debug!("tagged pipeline produced nothing");
            return self.fallback(text, GlossPath::EmptyFallback, Some(extraction), faults);
        }

        GlossAnalysis {
            gloss,
            path: GlossPath::Tagged,
            extraction: Some(extraction),
            faults,
        }
    }

    fn fallback(
        &self,
        text: &str,
        path: GlossPath,
        extraction: Option<ExtractionResult>,
        faults: Vec<StageFault>,
    ) -> GlossAnalysis {
        let gloss = self.splitter.split(text);
        debug!(%path, ?gloss, "basic split");
        GlossAnalysis {
            gloss,
            path,
            extraction,
            faults,
        }
    }
}

impl Default for GlossReorderer {
    fn default() -> Self {
        Self::from_config(ReordererConfig::default())
    }
}

impl fmt::Debug for GlossReorderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlossReorderer")
            .field("tagger", &self.tagger.as_ref().map(|t| t.name()))
            .field("lexicon", &self.lexicon)
            .finish_non_exhaustive()
    }
}

/// Records a stage fault and yields the stage's identity output.
fn absorb<T>(faults: &mut Vec<StageFault>, fault: StageFault, identity: T) -> T {
    warn!(%fault, "stage degraded to no-op");
    faults.push(fault);
    identity
}
