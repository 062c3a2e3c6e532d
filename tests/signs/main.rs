//! Integration tests for Layer 2: Signs
//!
//! Tests for sign records, word lookup, and index files.

mod files;
mod lookup;
