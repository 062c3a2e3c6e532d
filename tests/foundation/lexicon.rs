//! Integration tests for the lexicon and its JSON overrides

use nzsl_foundation::{ErrorKind, Lexicon, WordPattern};

#[test]
fn builtin_lexicon() {
    let lex = Lexicon::nzsl();
    assert!(lex.time_words().contains_word("tomorrow"));
    assert!(lex.negatives().contains_word("not"));
    assert!(lex.is_grammar_word("the"));
    assert_eq!(lex.canonical_pronoun("I"), "me");
    assert_eq!(lex.canonical_pronoun("their"), "they");
    assert_eq!(lex.canonical_pronoun("apple"), "apple");
    assert!(lex.validate().is_ok());
}

#[test]
fn canonical_pronoun_is_idempotent() {
    let lex = Lexicon::nzsl();
    for word in ["i", "my", "us", "them", "his", "you", "cat"] {
        let once = lex.canonical_pronoun(word);
        assert_eq!(lex.canonical_pronoun(&once), once);
    }
}

#[test]
fn overrides_replace_only_given_lists() {
    let json = r#"{
        "time_words": ["tomorrow", "next week"],
        "pronouns": { "me": ["i"] }
    }"#;
    let lex = Lexicon::nzsl().with_json_overrides("test.json", json).unwrap();
    assert_eq!(lex.time_words().len(), 2);
    assert!(lex.time_words().contains_word("tomorrow"));
    assert!(!lex.time_words().contains_word("yesterday"));
    assert_eq!(lex.canonical_pronoun("i"), "me");
    assert_eq!(lex.canonical_pronoun("us"), "us");
    assert!(lex.negatives().contains_word("not"));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = Lexicon::nzsl()
        .with_json_overrides("test.json", r#"{ "adverbs": [] }"#)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidLexicon(_)));
    assert_eq!(
        err.context.and_then(|c| c.source).as_deref(),
        Some("test.json")
    );
}

#[test]
fn builders_replace_word_lists() {
    let lex = Lexicon::empty().with_negatives(WordPattern::from_words(["nope"]));
    assert!(lex.negatives().contains_word("nope"));
    assert!(lex.time_words().is_empty());
    assert_eq!(lex.pronoun_count(), 0);
}
