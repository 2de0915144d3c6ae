//! End-to-end scenarios for frequency analysis.

use std::collections::BTreeMap;

use termtally::cli::commands::{load_text, split_terms};
use termtally::cli::output::render_report;
use termtally::frequency::{AnalysisReport, EMPTY_TEXT_MESSAGE, build_result};

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn expect_counts(report: AnalysisReport) -> BTreeMap<String, u64> {
    match report {
        AnalysisReport::Counts(counts) => counts,
        other => panic!("expected counts, got {other:?}"),
    }
}

#[test]
fn top_words_all_tied_sorted_and_case_folded() {
    let report = build_result("The quick brown fox", &[]).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(json, r#"{"brown":1,"fox":1,"quick":1,"the":1}"#);
}

#[test]
fn top_words_single_winner() {
    let report = build_result("cat cat dog", &[]).unwrap();
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"cat":2}"#
    );
}

#[test]
fn word_term_counts_whole_tokens_only() {
    let report = build_result("hello-world hello", &terms(&["hello"])).unwrap();
    assert_eq!(serde_json::to_string(&report).unwrap(), r#"{"hello":1}"#);
}

#[test]
fn phrase_term_counts_standalone_occurrences() {
    let report = build_result("new york city new york", &terms(&["new york"])).unwrap();
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"new york":2}"#
    );
}

#[test]
fn whitespace_only_text_yields_error_value() {
    let report = build_result("   ", &[]).unwrap();
    assert_eq!(
        report,
        AnalysisReport::Error {
            error: EMPTY_TEXT_MESSAGE.to_string()
        }
    );
}

#[test]
fn non_maximal_terms_are_excluded() {
    let report = build_result("apple banana", &terms(&["apple", "banana", "cherry"])).unwrap();
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"apple":1,"banana":1}"#
    );
}

#[test]
fn build_result_is_pure() {
    let text = "the cat the dog the bird";
    let list = terms(&["the", "cat"]);

    let first = serde_json::to_string(&build_result(text, &list).unwrap()).unwrap();
    let second = serde_json::to_string(&build_result(text, &list).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn analyzing_the_serialized_error_message_is_well_defined() {
    let error_json = serde_json::to_string(&build_result("", &[]).unwrap()).unwrap();

    // Feeding the serialized error back in must not crash and produces a
    // normal top-words report over its word tokens.
    let report = build_result(&error_json, &[]).unwrap();
    let counts = expect_counts(report);
    assert_eq!(counts.len(), 3);
    assert!(counts.values().all(|&v| v == 1));
}

#[test]
fn non_error_reports_hold_the_tie_inclusive_max_invariant() {
    let inputs: &[(&str, Vec<String>)] = &[
        ("a b c a b a", vec![]),
        ("a b c a b a", terms(&["a", "b", "c"])),
        ("서울 부산 서울", vec![]),
        ("one two, two; three", terms(&["one", "two", "four five"])),
    ];

    for (text, list) in inputs {
        let counts = expect_counts(build_result(text, list).unwrap());
        assert!(!counts.is_empty());
        let max = *counts.values().max().unwrap();
        assert!(counts.values().all(|&v| v == max), "input: {text:?}");
    }
}

#[test]
fn result_keys_are_ascending() {
    let counts = expect_counts(build_result("delta alpha charlie bravo", &[]).unwrap());
    let keys: Vec<&String> = counts.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn all_absent_terms_tie_at_zero() {
    let report = build_result("cat dog", &terms(&["bird", "fish"])).unwrap();
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"bird":0,"fish":0}"#
    );
}

#[test]
fn hangul_text_end_to_end() {
    let report = build_result("사과 배 사과", &[]).unwrap();
    assert_eq!(serde_json::to_string(&report).unwrap(), r#"{"사과":2}"#);

    let report = build_result("서울 가는 길, 서울 가는 기차", &terms(&["서울", "가는 길"])).unwrap();
    let counts = expect_counts(report);
    assert_eq!(counts.get("서울"), Some(&2));
    assert_eq!(counts.get("가는 길"), None);
}

#[test]
fn comma_split_and_core_trimming_compose() {
    let list = split_terms(" apple ,banana,  ,cherry");
    let report = build_result("apple banana apple", &list).unwrap();
    let counts = expect_counts(report);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get("apple"), Some(&2));
}

#[test]
fn file_input_end_to_end() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "cat cat dog").unwrap();

    let text = load_text(None, Some(file.path().to_path_buf())).unwrap();
    let report = build_result(&text, &[]).unwrap();
    assert_eq!(render_report(&report).unwrap(), r#"{"cat":2}"#);
}

#[test]
fn multi_entry_reports_render_indented() {
    let report = build_result("b a", &[]).unwrap();
    let rendered = render_report(&report).unwrap();
    assert!(rendered.contains('\n'));
    assert!(rendered.contains("  \"a\": 1"));
}
