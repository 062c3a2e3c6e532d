//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error, Token, WordPattern, and Lexicon.

mod errors;
mod lexicon;
mod patterns;
mod tokens;
