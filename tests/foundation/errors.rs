//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use nzsl_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_tagger_unavailable() {
    let err = Error::tagger_unavailable();
    assert!(matches!(err.kind, ErrorKind::TaggerUnavailable));
    assert_eq!(format!("{err}"), "tagger unavailable");
}

#[test]
fn error_tagging_failed() {
    let err = Error::tagging_failed("model crashed");
    assert!(matches!(err.kind, ErrorKind::TaggingFailed(_)));
    assert!(format!("{err}").contains("model crashed"));
}

#[test]
fn error_malformed_tags() {
    let err = Error::malformed_tags("token 'red apple' has two words");
    assert!(matches!(err.kind, ErrorKind::MalformedTags(_)));
    assert!(format!("{err}").contains("red apple"));
}

#[test]
fn error_sign_not_found() {
    let err = Error::sign_not_found(1042);
    assert!(matches!(err.kind, ErrorKind::SignNotFound(1042)));
    assert_eq!(format!("{err}"), "sign not found: 1042");
}

#[test]
fn error_io_and_serialization() {
    assert!(matches!(Error::io("disk").kind, ErrorKind::IoError(_)));
    assert!(matches!(
        Error::serialization("bad byte").kind,
        ErrorKind::SerializationError(_)
    ));
}

#[test]
fn error_invalid_command() {
    let err = Error::invalid_command("unknown command ':zap'");
    assert!(matches!(err.kind, ErrorKind::InvalidCommand(_)));
    assert_eq!(format!("{err}"), "invalid command: unknown command ':zap'");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    let err = Error::invalid_lexicon("bad");
    assert!(err.context.is_none());
}

#[test]
fn context_display_with_position() {
    let ctx = ErrorContext::new()
        .with_source("lexicon.json")
        .with_position(3, 14);
    assert_eq!(format!("{ctx}"), "at lexicon.json:3:14");
}

#[test]
fn context_display_without_position() {
    let ctx = ErrorContext::new().with_source("stdin");
    assert_eq!(format!("{ctx}"), "at stdin");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::pattern_match_failed("x"));
}
