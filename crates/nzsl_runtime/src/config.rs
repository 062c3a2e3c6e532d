//! Configuration for the translator runtime.

use std::fs;
use std::path::{Path, PathBuf};

use nzsl_foundation::{Error, Lexicon, Result};
use nzsl_gloss::{GlossReorderer, ReordererConfig};
use nzsl_signs::{SignIndex, store};

use crate::session::Translator;

/// Runtime settings, usually built from command line arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Sign index to load (JSON or `MessagePack`).
    pub index_path: Option<PathBuf>,

    /// Lexicon override file (JSON).
    pub lexicon_path: Option<PathBuf>,

    /// Whether to use the tagger.
    pub use_tagger: bool,

    /// Read sentences from inputs and print glosses instead of running the REPL.
    pub batch: bool,

    /// Input files for batch mode. Empty means stdin.
    pub inputs: Vec<PathBuf>,

    /// Log at debug level.
    pub verbose: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            index_path: None,
            lexicon_path: None,
            use_tagger: true,
            batch: false,
            inputs: Vec::new(),
            verbose: false,
        }
    }
}

impl RuntimeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the sign index path.
    #[must_use]
    pub fn with_index(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_path = Some(path.into());
        self
    }

    /// Builder method to set the lexicon override path.
    #[must_use]
    pub fn with_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Builder method to enable or disable the tagger.
    #[must_use]
    pub fn with_tagger(mut self, enabled: bool) -> Self {
        self.use_tagger = enabled;
        self
    }

    /// Builder method to set batch mode.
    #[must_use]
    pub fn with_batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    /// Builder method to add a batch input file.
    #[must_use]
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Builder method to set verbose logging.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Default log filter when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Loads the lexicon, applying overrides from `lexicon_path` if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the override file cannot be read or is invalid.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        let Some(path) = &self.lexicon_path else {
            return Ok(Lexicon::nzsl());
        };
        let json = read_text(path)?;
        Lexicon::nzsl().with_json_overrides(&path.display().to_string(), &json)
    }

    /// Loads the sign index if `index_path` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the index file cannot be read or parsed.
    pub fn load_index(&self) -> Result<Option<SignIndex>> {
        self.index_path
            .as_deref()
            .map(store::load_from_file)
            .transpose()
    }

    /// Reorderer configuration derived from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon cannot be loaded.
    pub fn reorderer_config(&self) -> Result<ReordererConfig> {
        Ok(ReordererConfig::default()
            .with_lexicon(self.load_lexicon()?)
            .with_tagger_enabled(self.use_tagger))
    }

    /// Builds a translator from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon or sign index cannot be loaded.
    pub fn build_translator(&self) -> Result<Translator> {
        let reorderer = GlossReorderer::from_config(self.reorderer_config()?);
        let translator = Translator::new(reorderer);
        Ok(match self.load_index()? {
            Some(index) => translator.with_index(index),
            None => translator,
        })
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))
}
