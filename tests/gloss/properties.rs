//! Output properties over generated sentences

use nzsl_foundation::Lexicon;
use nzsl_gloss::{BasicSplitter, GlossPath, GlossReorderer};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "I", "my", "we", "us", "them", "the", "a", "is", "am", "will", "not", "never", "don't",
    "tomorrow", "Today", "morning", "red", "big", "happy", "apple", "dog", "friend", "go",
    "going", "eat", "like", "ice",
];

const PRONOUN_VARIANTS: &[&str] = &["i", "my", "mine", "us", "our", "them", "their"];

fn sentence() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..12)
}

fn is_time_word(word: &str) -> bool {
    Lexicon::nzsl().time_words().contains_word(word)
}

fn is_negative(word: &str) -> bool {
    Lexicon::nzsl().negatives().contains_word(word)
}

proptest! {
    #[test]
    fn output_is_trimmed_lowercase_and_non_empty(words in sentence()) {
        let gloss = GlossReorderer::default().gloss(&words.join(" "));
        for word in &gloss {
            prop_assert!(!word.is_empty());
            prop_assert_eq!(word.trim(), word.as_str());
            prop_assert_eq!(word.to_lowercase(), word.clone());
        }
    }

    #[test]
    fn time_words_form_a_prefix_in_order(words in sentence()) {
        let gloss = GlossReorderer::default().gloss(&words.join(" "));
        let expected: Vec<String> = words
            .iter()
            .filter(|w| is_time_word(w))
            .map(|w| w.to_lowercase())
            .collect();
        prop_assert!(gloss.len() >= expected.len());
        prop_assert_eq!(&gloss[..expected.len()], expected.as_slice());
    }

    #[test]
    fn negation_gives_exactly_one_trailing_not(words in sentence()) {
        let gloss = GlossReorderer::default().gloss(&words.join(" "));
        let nots = gloss.iter().filter(|w| *w == "not").count();
        if words.iter().any(|w| is_negative(w)) {
            prop_assert_eq!(nots, 1);
            prop_assert_eq!(gloss.last().map(String::as_str), Some("not"));
        } else {
            prop_assert_eq!(nots, 0);
        }
    }

    #[test]
    fn tagged_output_has_only_canonical_pronouns(words in sentence()) {
        let analysis = GlossReorderer::default().analyze(&words.join(" "));
        if analysis.path == GlossPath::Tagged {
            for word in &analysis.gloss {
                prop_assert!(!PRONOUN_VARIANTS.contains(&word.as_str()), "{}", word);
            }
        }
    }

    #[test]
    fn without_tagger_output_is_the_basic_split(text in "\\PC{0,60}") {
        prop_assert_eq!(
            GlossReorderer::without_tagger().gloss(&text),
            BasicSplitter::default().split(&text)
        );
    }

    #[test]
    fn splitting_is_idempotent(text in "[A-Za-zāēō0-9 ,.!?'-]{0,60}") {
        let splitter = BasicSplitter::default();
        let once = splitter.split(&text);
        let twice = splitter.split(&once.join(" "));
        prop_assert_eq!(twice, once);
    }
}
