//! English to NZSL gloss reordering.
//!
//! This crate turns an English sentence like "I am not going tomorrow" into
//! the sign order used in New Zealand Sign Language: TOMORROW ME GOING NOT.
//!
//! # Architecture
//!
//! ```text
//! "the red apple is not big"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TAGGER        │  → [the/Det, red/Adj, apple/Noun, is/Verb, not, big/Adj]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TIME + NEGATIVE │  → time: [], negative: true
//! │ EXTRACTION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR WORD    │  → [red/Adj, apple/Noun, big/Adj]
//! │ ELISION         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TRANSPOSITION + │  → [apple, red, big]
//! │ PRONOUNS        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ASSEMBLY        │  → [apple, red, big, not]
//! └─────────────────┘
//! ```
//!
//! Any stage that fails is skipped. If there is no tagger, tagging fails, or
//! nothing survives, the [`BasicSplitter`] result is returned instead.
//!
//! # Modules
//!
//! - [`tagger`] - The pluggable tagging capability
//! - [`lexicon_tagger`] - Built-in vocabulary tagger
//! - [`vocabulary`] - Word category registry used by the lexicon tagger
//! - [`english`] - Built-in English word lists
//! - [`tokenizer`] - Sentence to surface words
//! - [`splitter`] - Fallback stop-word splitter
//! - [`stage`] - Individual pipeline stages
//! - [`reorderer`] - Pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod english;
pub mod lexicon_tagger;
pub mod reorderer;
pub mod splitter;
pub mod stage;
pub mod tagger;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use lexicon_tagger::LexiconTagger;
pub use reorderer::{ExtractionResult, GlossAnalysis, GlossPath, GlossReorderer, ReordererConfig};
pub use splitter::BasicSplitter;
pub use stage::{Stage, StageFault};
pub use tagger::{Tagger, UnavailableTagger};
pub use vocabulary::Vocabulary;
