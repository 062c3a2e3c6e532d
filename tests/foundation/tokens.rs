//! Integration tests for tokens and tagged sentences

use nzsl_foundation::{Tag, TaggedSentence, Token};

#[test]
fn tag_names_parse_loosely() {
    assert_eq!("ADJ".parse::<Tag>().unwrap(), Tag::Adjective);
    assert_eq!("noun".parse::<Tag>().unwrap(), Tag::Noun);
    assert_eq!("Article".parse::<Tag>().unwrap(), Tag::Determiner);
    assert_eq!(
        "Preposition".parse::<Tag>().unwrap(),
        Tag::Other("Preposition".to_string())
    );
}

#[test]
fn token_display_lists_tags() {
    let token = Token::new("apple").with_tags([Tag::Noun, Tag::Singular]);
    assert_eq!(token.to_string(), "apple/Noun+Singular");
    assert!(token.is_noun());
    assert!(!token.is_adjective());
}

#[test]
fn sentence_words_are_lowercase() {
    let sentence: TaggedSentence = ["The", " Red ", "APPLE"].into_iter().map(Token::new).collect();
    assert_eq!(sentence.words(), vec!["the", "red", "apple"]);
    assert_eq!(sentence.len(), 3);
}

#[test]
fn retain_mask_builds_a_new_sentence() {
    let sentence: TaggedSentence = ["a", "b", "c"].into_iter().map(Token::new).collect();
    let kept = sentence.retain_mask(&[true, false, true]);
    assert_eq!(kept.words(), vec!["a", "c"]);
    assert_eq!(sentence.len(), 3);
}
