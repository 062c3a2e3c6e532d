//! Index files in both formats

use nzsl_foundation::ErrorKind;
use nzsl_signs::{SignId, SignIndex, SignRecord, store};

fn sample() -> SignIndex {
    SignIndex::from_records([
        SignRecord::new(1, "tomorrow").with_video("tomorrow.mp4"),
        SignRecord::new(2, "go").with_secondary("going").with_maori("haere"),
    ])
}

#[test]
fn json_index_matches_generator_output() {
    let json = store::to_json(&sample()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["totalSigns"], 2);
    assert_eq!(value["totalWords"], 3);
    assert_eq!(value["index"]["going"], serde_json::json!([2]));
    assert_eq!(value["signs"]["1"]["video"], "tomorrow.mp4");
}

#[test]
fn msgpack_is_smaller_than_json() {
    let index = sample();
    let json = store::to_json(&index).unwrap();
    let bytes = store::to_bytes(&index).unwrap();
    assert!(bytes.len() < json.len());
    assert_eq!(store::from_bytes(&bytes).unwrap(), index);
}

#[test]
fn stored_index_is_trusted_as_is() {
    let json = r#"{ "signs": {}, "index": { "ghost": [9] } }"#;
    let index = store::from_json_str("stale.json", json).unwrap();
    assert_eq!(index.find_signs("ghost"), &[SignId(9)]);
    assert!(!index.resolve(&["ghost"])[0].is_found());
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = store::from_bytes(&[0xc1, 0x00]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
}
