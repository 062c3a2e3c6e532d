//! NZSL Gloss - English to New Zealand Sign Language gloss reordering
//!
//! This crate re-exports all layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: nzsl_runtime     - REPL, CLI, batch translation
//! Layer 2: nzsl_signs       - Sign records, word index, index files
//! Layer 1: nzsl_gloss       - Tagger, splitter, reordering pipeline
//! Layer 0: nzsl_foundation  - Core types (Token, WordPattern, Lexicon, Error)
//! ```

pub use nzsl_foundation as foundation;
pub use nzsl_gloss as gloss;
pub use nzsl_runtime as runtime;
pub use nzsl_signs as signs;
