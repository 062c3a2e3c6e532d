//! Error types for NZSL gloss translation.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! The gloss pipeline itself never returns these to its caller; they travel
//! inside stage faults and diagnostics. Lexicon loading, sign index loading,
//! and the REPL surface them directly.

use std::fmt;

use thiserror::Error;

/// The main error type for NZSL operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a tagger unavailable error.
    #[must_use]
    pub fn tagger_unavailable() -> Self {
        Self::new(ErrorKind::TaggerUnavailable)
    }

    /// Creates a tagging failure error.
    #[must_use]
    pub fn tagging_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TaggingFailed(message.into()))
    }

    /// Creates a malformed tag data error.
    #[must_use]
    pub fn malformed_tags(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedTags(message.into()))
    }

    /// Creates a pattern match failure error.
    #[must_use]
    pub fn pattern_match_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PatternMatchFailed(message.into()))
    }

    /// Creates an invalid lexicon error.
    #[must_use]
    pub fn invalid_lexicon(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidLexicon(message.into()))
    }

    /// Creates a sign not found error.
    #[must_use]
    pub fn sign_not_found(id: u64) -> Self {
        Self::new(ErrorKind::SignNotFound(id))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Creates an invalid command error.
    #[must_use]
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommand(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No tagging capability is configured.
    #[error("tagger unavailable")]
    TaggerUnavailable,

    /// The tagger failed to tag a sentence.
    #[error("tagging failed: {0}")]
    TaggingFailed(String),

    /// The tagger produced tokens that cannot be used structurally.
    #[error("malformed tag data: {0}")]
    MalformedTags(String),

    /// Matching or removing a word pattern failed.
    #[error("pattern match failed: {0}")]
    PatternMatchFailed(String),

    /// A lexicon definition was rejected.
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// A sign id was referenced by the index but has no record.
    #[error("sign not found: {0}")]
    SignNotFound(u64),

    /// File system error.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// User input to the REPL or CLI was not understood.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or input description.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for NZSL operations.
pub type Result<T> = std::result::Result<T, Error>;
