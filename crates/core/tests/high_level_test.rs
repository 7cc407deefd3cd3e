//! Tests for the high-level extraction API.

use passage_core::high_level::{extract_text, extract_text_from_lines};
use passage_core::layout::ReflowParams;
use passage_core::recognize::RecognizedLine;

#[test]
fn extract_text_reconstructs_paragraphs_from_a_dump() {
    let dump = br#"[
        {"text": "Gamma", "min_y": 0.5},
        {"text": "Alpha", "min_y": 0.9},
        {"text": "Delta", "min_y": 0.4},
        {"text": "Beta",  "min_y": 0.8}
    ]"#;

    let text = extract_text(dump, None).unwrap();
    assert_eq!(text, "Alpha Beta\n\nGamma Delta");
}

#[test]
fn extract_text_honors_explicit_params() {
    let dump = br#"[
        {"text": "Alpha", "min_y": 0.9},
        {"text": "Beta",  "min_y": 0.8},
        {"text": "Gamma", "min_y": 0.5},
        {"text": "Delta", "min_y": 0.4}
    ]"#;

    let text = extract_text(dump, Some(ReflowParams::new(4.0))).unwrap();
    assert_eq!(text, "Alpha Beta Gamma Delta");
}

#[test]
fn extract_text_rejects_a_malformed_dump() {
    assert!(extract_text(b"nope", None).is_err());
}

#[test]
fn in_memory_variant_matches_the_dump_path() {
    let lines = vec![
        RecognizedLine::new("Alpha", 0.9),
        RecognizedLine::new("Beta", 0.8),
        RecognizedLine::new("Gamma", 0.5),
        RecognizedLine::new("Delta", 0.4),
    ];

    assert_eq!(
        extract_text_from_lines(&lines, None),
        "Alpha Beta\n\nGamma Delta"
    );
}
