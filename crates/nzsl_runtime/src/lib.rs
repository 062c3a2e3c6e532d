//! Interactive translator and CLI for NZSL glosses.
//!
//! This crate provides:
//! - [`Repl`] - Interactive translate-and-lookup loop
//! - [`Translator`] - Reorderer plus sign dictionary, shared with batch mode
//! - [`RuntimeConfig`] - Settings for the `nzsl` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::GlossHighlighter;
pub use repl::{Command, Repl};
pub use session::{Translation, Translator};
