//! Sentence scenarios through the default reorderer

use nzsl_foundation::{Lexicon, WordPattern};
use nzsl_gloss::{GlossPath, GlossReorderer, ReordererConfig};

fn gloss(text: &str) -> Vec<String> {
    GlossReorderer::default().gloss(text)
}

#[test]
fn negation_moves_to_the_end_and_time_to_the_front() {
    assert_eq!(
        gloss("I am not going tomorrow"),
        vec!["tomorrow", "me", "going", "not"]
    );
}

#[test]
fn adjective_follows_its_noun() {
    assert_eq!(gloss("the red apple is big"), vec!["apple", "red", "big"]);
    assert_eq!(gloss("She has a big dog."), vec!["she", "dog", "big"]);
}

#[test]
fn only_the_adjective_next_to_the_noun_moves() {
    assert_eq!(gloss("the big red apple"), vec!["big", "apple", "red"]);
}

#[test]
fn time_words_keep_their_order() {
    assert_eq!(
        gloss("Tomorrow morning I will go"),
        vec!["tomorrow", "morning", "me", "go"]
    );
    assert_eq!(
        gloss("I will go tomorrow morning"),
        vec!["tomorrow", "morning", "me", "go"]
    );
}

#[test]
fn joined_punctuation_splits_words() {
    assert_eq!(gloss("Tomorrow\u{2014}I will go"), vec!["tomorrow", "me", "go"]);
}

#[test]
fn pronoun_contractions_are_expanded() {
    assert_eq!(gloss("I'm not happy"), vec!["me", "happy", "not"]);
    assert_eq!(gloss("We'll go tomorrow"), vec!["tomorrow", "we", "go"]);
}

#[test]
fn contractions_count_as_negation() {
    assert_eq!(gloss("I don't like coffee"), vec!["me", "like", "coffee", "not"]);
}

#[test]
fn several_negations_give_one_not() {
    assert_eq!(gloss("I never do not go"), vec!["me", "go", "not"]);
}

#[test]
fn possessives_become_canonical_pronouns() {
    assert_eq!(gloss("my friend is not happy"), vec!["me", "friend", "happy", "not"]);
    assert_eq!(gloss("they like us"), vec!["they", "like", "we"]);
}

#[test]
fn only_grammar_words_gives_nothing() {
    let analysis = GlossReorderer::default().analyze("the is a");
    assert!(analysis.gloss.is_empty());
    assert_eq!(analysis.path, GlossPath::EmptyFallback);
}

#[test]
fn empty_input() {
    assert!(gloss("").is_empty());
    assert!(gloss("   ").is_empty());
}

#[test]
fn custom_time_phrases() {
    let lexicon = Lexicon::nzsl().with_time_words(WordPattern::from_words(["next week"]));
    let reorderer = GlossReorderer::from_config(ReordererConfig::default().with_lexicon(lexicon));
    assert_eq!(reorderer.gloss("we meet next week"), vec!["next week", "we", "meet"]);
}

#[test]
fn analysis_reports_partitions() {
    let analysis = GlossReorderer::default().analyze("I am not going tomorrow");
    assert_eq!(analysis.path, GlossPath::Tagged);
    assert!(analysis.faults.is_empty());
    let extraction = analysis.extraction.unwrap();
    assert_eq!(extraction.time_tokens, vec!["tomorrow"]);
    assert!(extraction.negative_found);
    assert_eq!(extraction.core_tokens, vec!["me", "going"]);
}
