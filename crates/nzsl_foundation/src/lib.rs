//! Core types, word patterns, and lexicon for NZSL gloss translation.
//!
//! This crate provides:
//! - [`Token`] and [`TaggedSentence`] - Tagged words produced by a tagger
//! - [`Tag`] - The part-of-speech tag vocabulary
//! - [`WordPattern`] - Closed, case-insensitive word and phrase sets
//! - [`Lexicon`] - The immutable word lists that drive reordering
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod lexicon;
pub mod pattern;
pub mod token;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use lexicon::{Lexicon, LexiconSpec};
pub use pattern::{WordPattern, normalize_word};
pub use token::{Tag, TaggedSentence, Token};
