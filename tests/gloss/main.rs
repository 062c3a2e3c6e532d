//! Integration tests for Layer 1: Gloss
//!
//! Tests for the reordering pipeline:
//! - Sentence scenarios through the built-in tagger
//! - Degradation when a tagger or stage fails
//! - Output properties over generated sentences

mod degradation;
mod properties;
mod scenarios;
