//! Sentence to signs, through every layer

use nzsl::foundation::Lexicon;
use nzsl::gloss::{GlossReorderer, ReordererConfig};
use nzsl::runtime::{RuntimeConfig, Translator};
use nzsl::signs::{SignIndex, SignMatch, SignRecord, store};

fn dictionary() -> SignIndex {
    SignIndex::from_records([
        SignRecord::new(10, "tomorrow").with_video("tomorrow.mp4"),
        SignRecord::new(20, "me").with_secondary("I"),
        SignRecord::new(30, "go"),
        SignRecord::new(40, "not"),
        SignRecord::new(50, "apple"),
        SignRecord::new(60, "red"),
    ])
}

#[test]
fn every_gloss_word_is_looked_up() {
    let translator = Translator::default().with_index(dictionary());
    let translation = translator.translate("I am not going tomorrow");
    let signs = translation.signs.unwrap();

    let ids: Vec<Option<u64>> = signs
        .iter()
        .map(|m| match m {
            SignMatch::Found { sign_id, .. } => Some(sign_id.0),
            SignMatch::Missing { .. } => None,
        })
        .collect();
    assert_eq!(ids, vec![Some(10), Some(20), Some(30), Some(40)]);
}

#[test]
fn reordered_adjectives_still_find_signs() {
    let translator = Translator::default().with_index(dictionary());
    let rendered = translator.translate("the red apple").render();
    assert!(rendered.starts_with("APPLE → RED"));
    assert!(rendered.contains("✓ apple #50"));
    assert!(rendered.contains("✓ red #60"));
}

#[test]
fn splitter_output_is_looked_up_too() {
    let reorderer = GlossReorderer::from_config(ReordererConfig::without_tagger());
    let translator = Translator::new(reorderer).with_index(dictionary());
    let translation = translator.translate("I am not going tomorrow");
    assert_eq!(translation.gloss, vec!["i", "not", "going", "tomorrow"]);
    assert!(translation.signs.unwrap().iter().all(SignMatch::is_found));
}

#[test]
fn config_loads_index_and_lexicon_files() {
    let dir = std::env::temp_dir();
    let index_path = dir.join("nzsl_integration_index.msgpack");
    let lexicon_path = dir.join("nzsl_integration_lexicon.json");
    store::save_to_file(&dictionary(), &index_path).unwrap();
    std::fs::write(
        &lexicon_path,
        r#"{ "time_words": ["tomorrow", "next week"] }"#,
    )
    .unwrap();

    let translator = RuntimeConfig::new()
        .with_index(&index_path)
        .with_lexicon(&lexicon_path)
        .build_translator()
        .unwrap();
    assert_eq!(
        translator.gloss("I go next week"),
        vec!["next week", "me", "go"]
    );
    assert_eq!(translator.index().map(SignIndex::sign_count), Some(6));

    let _ = std::fs::remove_file(&index_path);
    let _ = std::fs::remove_file(&lexicon_path);
}

#[test]
fn lexicon_from_config_matches_builtin_by_default() {
    let config = RuntimeConfig::new().reorderer_config().unwrap();
    assert_eq!(config.lexicon, Lexicon::nzsl());
}
