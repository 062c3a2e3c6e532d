//! Integration tests for word patterns

use nzsl_foundation::{WordPattern, normalize_word};

#[test]
fn normalize_strips_punctuation_and_case() {
    assert_eq!(normalize_word("Didn't"), "didnt");
    assert_eq!(normalize_word("TOMORROW!"), "tomorrow");
    assert_eq!(normalize_word("whānau"), "whānau");
    assert_eq!(normalize_word("..."), "");
}

#[test]
fn phrases_match_across_words() {
    let pattern = WordPattern::from_words(["next week", "tomorrow"]);
    assert_eq!(pattern.max_phrase_len(), 2);
    let words = ["see", "you", "Next", "Week", "or", "tomorrow"];
    assert_eq!(pattern.spans(&words), vec![2..4, 5..6]);
}

#[test]
fn longest_phrase_wins() {
    let pattern = WordPattern::from_words(["this", "this morning"]);
    assert_eq!(pattern.spans(&["this", "morning", "this"]), vec![0..2, 2..3]);
}

#[test]
fn union_is_persistent() {
    let a = WordPattern::from_words(["not"]);
    let b = WordPattern::from_words(["never"]);
    let both = a.union(&b);
    assert_eq!(both.len(), 2);
    assert_eq!(a.len(), 1);
    assert_eq!(both.entries(), vec!["never", "not"]);
}

#[test]
fn blank_entries_are_ignored() {
    let pattern = WordPattern::from_words(["", "  ", "!!"]);
    assert!(pattern.is_empty());
    assert!(!pattern.contains_word(""));
}
