//! Word lookup against a small dictionary

use nzsl_signs::{SEARCH_LIMIT, SignId, SignIndex, SignMatch, SignRecord};

fn dictionary() -> SignIndex {
    SignIndex::from_records([
        SignRecord::new(100, "friend").with_secondary("mate"),
        SignRecord::new(101, "friend"),
        SignRecord::new(200, "dance"),
        SignRecord::new(300, "walk"),
        SignRecord::new(400, "Wellington").with_maori("Te Whanganui-a-Tara"),
        SignRecord::new(500, "hospital"),
        SignRecord::new(600, "hop"),
    ])
}

#[test]
fn every_sign_for_a_word_is_kept_in_order() {
    assert_eq!(dictionary().find_signs("friend"), &[SignId(100), SignId(101)]);
}

#[test]
fn inflected_forms_find_their_base() {
    let index = dictionary();
    assert_eq!(index.find_signs("friends"), &[SignId(100), SignId(101)]);
    assert_eq!(index.find_signs("mates"), &[SignId(100)]);
    assert_eq!(index.find_signs("dancing"), &[SignId(200)]);
    assert_eq!(index.find_signs("hopped"), &[SignId(600)]);
    assert_eq!(index.find_signs("walked"), &[SignId(300)]);
    assert_eq!(index.find_signs("walking"), &[SignId(300)]);
}

#[test]
fn search_finds_words_containing_the_query() {
    let index = dictionary();
    assert_eq!(
        index.search("ien", SEARCH_LIMIT),
        vec![("friend".to_string(), SignId(100)), ("friend".to_string(), SignId(101))]
    );
    assert_eq!(
        index.search(" HO ", SEARCH_LIMIT),
        vec![("hop".to_string(), SignId(600)), ("hospital".to_string(), SignId(500))]
    );
    assert!(index.search("h", SEARCH_LIMIT).is_empty());
    assert!(index.search("tara", SEARCH_LIMIT).is_empty());
}

#[test]
fn prefix_is_the_last_resort() {
    let index = dictionary();
    assert_eq!(index.find_signs("hosp"), &[SignId(500)]);
    assert_eq!(index.find_signs("wellington"), &[SignId(400)]);
    assert!(index.find_signs("x").is_empty());
}

#[test]
fn maori_glosses_are_not_indexed() {
    assert!(dictionary().find_signs("te").is_empty());
}

#[test]
fn resolve_keeps_gloss_order() {
    let index = dictionary();
    let gloss = ["tomorrow", "me", "walking", "not"];
    let matches = index.resolve(&gloss);
    let words: Vec<&str> = matches.iter().map(|m| m.word()).collect();
    assert_eq!(words, gloss);
}

#[test]
fn resolve_picks_the_first_sign() {
    let index = dictionary();
    let matches = index.resolve(&["friends"]);
    match &matches[0] {
        SignMatch::Found { sign_id, sign, .. } => {
            assert_eq!(*sign_id, SignId(100));
            assert_eq!(sign.headword(), Some("friend"));
        }
        SignMatch::Missing { .. } => panic!("expected a sign"),
    }
}
