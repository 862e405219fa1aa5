//! Integration tests for batch decoding.

use std::fs;
use std::path::PathBuf;

use consent_cli::batch::{decode_codes, read_codes, render_json};
use consent_core::ConsentDecoder;
use consent_standards::DiseaseEntry;

fn test_decoder() -> ConsentDecoder {
    ConsentDecoder::with_diseases(&[DiseaseEntry::new(
        "ADHD-RC",
        "attention deficit hyperactivity disorder (research criteria)",
    )])
}

fn codes(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn unique_temp_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "consent-codes-{}-{}-{}.txt",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn counts_errors_and_unspecified() {
    let run = decode_codes(
        &test_decoder(),
        &codes(&["GRU-IRB", "XYZ", "TBD", "DS-ADHD-RC,NPU", ""]),
    );
    assert_eq!(run.results.len(), 5);
    assert_eq!(run.error_count(), 1);
    assert_eq!(run.unspecified_count(), 2);
    assert!(run.has_errors());
    assert_eq!(run.results[1].code, "XYZ");
    assert!(run.results[1].has_error());
}

#[test]
fn clean_run_has_no_errors() {
    let run = decode_codes(&test_decoder(), &codes(&["NRES", "HMB-NPU"]));
    assert!(!run.has_errors());
}

#[test]
fn reads_one_code_per_line() {
    let path = unique_temp_file("input");
    fs::write(&path, "GRU-IRB\r\n\nDS-ADHD-RC,NPU\n").unwrap();
    let codes = read_codes(&path).unwrap();
    assert_eq!(codes, vec!["GRU-IRB", "", "DS-ADHD-RC,NPU"]);
    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_input_file_is_an_error() {
    let path = unique_temp_file("missing");
    let err = read_codes(&path).unwrap_err();
    assert!(format!("{err:#}").contains("read codes"));
}

#[test]
fn json_output() {
    let run = decode_codes(&test_decoder(), &codes(&["GRU-IRB", "NA"]));
    let json = render_json(&run).unwrap();
    insta::assert_snapshot!("decode_json", json);
}
