//! Cross-layer integration tests for NZSL Gloss
//!
//! Tests that verify correct interaction between multiple crates.

mod batch;
mod translation;
