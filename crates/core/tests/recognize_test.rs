//! Tests for the recognition-dump boundary format.

use passage_core::error::PassageError;
use passage_core::recognize::{RecognizedLine, lines_from_json, lines_to_json};

#[test]
fn parses_a_dump_in_recognition_order() {
    let dump = br#"[
        {"text": "second", "min_y": 0.4},
        {"text": "first", "min_y": 0.9}
    ]"#;

    let lines = lines_from_json(dump).unwrap();
    assert_eq!(
        lines,
        vec![
            RecognizedLine::new("second", 0.4),
            RecognizedLine::new("first", 0.9),
        ]
    );
}

#[test]
fn empty_array_is_a_valid_dump() {
    assert_eq!(lines_from_json(b"[]").unwrap(), vec![]);
}

#[test]
fn malformed_json_is_a_decode_error() {
    let err = lines_from_json(b"{not json").unwrap_err();
    assert!(matches!(err, PassageError::DecodeError(_)));
    assert!(err.to_string().contains("recognition dump"));
}

#[test]
fn wrong_shape_is_a_decode_error() {
    // Valid JSON, but an object instead of an array of lines.
    let err = lines_from_json(br#"{"text": "x", "min_y": 0.5}"#).unwrap_err();
    assert!(matches!(err, PassageError::DecodeError(_)));
}

#[test]
fn dump_round_trips() {
    let lines = vec![
        RecognizedLine::new("one", 0.75),
        RecognizedLine::new("two", 0.5),
    ];
    let json = lines_to_json(&lines).unwrap();
    assert_eq!(lines_from_json(json.as_bytes()).unwrap(), lines);
}
