//! End-to-end decoding of consent codes.

use consent_core::{ConsentDecoder, SENTINEL_CODES};
use consent_model::{ConsentDescription, ConsentFlag, DecodeError, DecodedConsent, SymbolClass};
use consent_standards::{DiseaseEntry, default_disease_table_path, load_default_disease_table};

const ADHD_RC: &str = "attention deficit hyperactivity disorder (research criteria)";

fn test_decoder() -> ConsentDecoder {
    ConsentDecoder::with_diseases(&[
        DiseaseEntry::new("ADHD", "attention deficit hyperactivity disorder"),
        DiseaseEntry::new("ADHD-RC", ADHD_RC),
        DiseaseEntry::new("EP-SZ", "epilepsy and schizophrenia"),
        DiseaseEntry::new("MDS", "myelodysplastic syndrome"),
    ])
}

fn decode(code: &str) -> DecodedConsent {
    match test_decoder().decode(code) {
        ConsentDescription::Decoded(decoded) => decoded,
        ConsentDescription::Unspecified => panic!("{code:?} decoded as unspecified"),
    }
}

fn present(decoded: &DecodedConsent) -> Vec<&'static str> {
    decoded
        .flags
        .present()
        .into_iter()
        .map(|flag| flag.symbol())
        .collect()
}

#[test]
fn sentinels_are_unspecified() {
    let decoder = test_decoder();
    for code in SENTINEL_CODES {
        let description = decoder.decode(code);
        assert!(description.is_unspecified(), "{code:?}");
        assert_eq!(description.title(), "Unspecified");
        assert_eq!(description.long_description(), "Unspecified");
        assert_eq!(description.disease_code(), "Unspecified");
        assert_eq!(description.disease_text(), "Unspecified");
        assert_eq!(description.flag(ConsentFlag::Gru), None);
    }
}

#[test]
fn sentinel_match_is_exact() {
    let decoded = decode("tbd");
    assert_eq!(decoded.error, Some(DecodeError::unknown_symbol("tbd")));
}

#[test]
fn primary_only() {
    let decoded = decode("NRES");
    assert_eq!(decoded.title, "No restrictions");
    assert_eq!(decoded.long_description, "No restrictions on data use.");
    assert_eq!(present(&decoded), vec!["NRES"]);
    assert_eq!(decoded.disease_code, "");
    assert_eq!(decoded.disease_text, "");
    assert!(decoded.error.is_none());
}

#[test]
fn primary_with_secondary() {
    let decoded = decode("GRU-IRB");
    assert_eq!(decoded.title, "General research use and clinical care (IRB)");
    assert_eq!(
        decoded.long_description,
        "For health/medical/biomedical purposes, including the study of population origins or ancestry. \
         Requestor must provide documentation of local IRB/REC approval."
    );
    assert_eq!(present(&decoded), vec!["GRU", "IRB"]);
}

#[test]
fn secondaries_are_comma_joined_in_title() {
    let decoded = decode("HMB-IRB_PUB, COL,NPU");
    assert_eq!(
        decoded.title,
        "Health/medical/biomedical research and clinical care (IRB, PUB, COL, NPU)"
    );
    assert_eq!(present(&decoded), vec!["HMB", "IRB", "PUB", "COL", "NPU"]);
    assert!(decoded.error.is_none());
}

#[test]
fn disease_code_resolved_through_trie() {
    let decoded = decode("DS-ADHD-RC,NPU");
    assert_eq!(decoded.disease_code, "ADHD-RC");
    assert_eq!(decoded.disease_text, ADHD_RC);
    assert_eq!(
        decoded.title,
        "Disease-specific research and clinical care (ADHD-RC, NPU)"
    );
    assert_eq!(
        decoded.long_description,
        format!(
            "Use of the data must be related to {ADHD_RC}. \
             Use of the data is limited to not-for-profit organizations."
        )
    );
    assert_eq!(present(&decoded), vec!["NPU"]);
    assert!(decoded.error.is_none());
}

#[test]
fn shorter_abbreviation_matches_when_longer_does_not_continue() {
    let decoded = decode("DS-ADHD-IRB");
    assert_eq!(decoded.disease_code, "ADHD");
    assert_eq!(decoded.disease_text, "attention deficit hyperactivity disorder");
    assert_eq!(
        decoded.title,
        "Disease-specific research and clinical care (ADHD, IRB)"
    );
    assert!(decoded.flags.irb);
}

#[test]
fn unknown_disease_is_quoted() {
    let decoded = decode("DS-XYZ");
    assert_eq!(decoded.disease_code, "XYZ");
    assert_eq!(decoded.disease_text, "");
    assert_eq!(decoded.title, "Disease-specific research and clinical care (XYZ)");
    assert_eq!(
        decoded.long_description,
        "Use of the data must be related to disease \"XYZ\"."
    );
    assert!(decoded.error.is_none());
}

#[test]
fn disease_prefix_without_value_is_quoted() {
    let decoded = decode("DS-EP");
    assert_eq!(decoded.disease_code, "EP");
    assert_eq!(decoded.disease_text, "");
    assert_eq!(
        decoded.long_description,
        "Use of the data must be related to disease \"EP\"."
    );
}

#[test]
fn unknown_continuation_leaves_trie() {
    let decoded = decode("DS-ADHD-XX-GSO");
    assert_eq!(decoded.disease_code, "ADHD-XX");
    assert_eq!(decoded.disease_text, "");
    assert_eq!(
        decoded.title,
        "Disease-specific research and clinical care (ADHD-XX, GSO)"
    );
    assert!(decoded.flags.gso);
}

#[test]
fn trie_piece_wins_over_symbol() {
    let decoded = decode("DS-MDS");
    assert_eq!(decoded.disease_code, "MDS");
    assert_eq!(decoded.disease_text, "myelodysplastic syndrome");
    assert!(!decoded.flags.mds);
    assert!(decoded.error.is_none());
}

#[test]
fn symbol_not_in_trie_ends_disease() {
    let decoder = ConsentDecoder::default();
    let description = decoder.decode("DS-MDS");
    let decoded = description.decoded().expect("decoded");
    assert_eq!(
        decoded.error,
        Some(DecodeError::missing_parameter("DS"))
    );
    assert_eq!(decoded.title, "ERROR");
    assert_eq!(
        decoded.long_description,
        "ERROR: Missing required parameter to \"DS\""
    );
    assert!(decoded.flags.mds);
    assert_eq!(decoded.disease_code, "");
}

#[test]
fn secondary_parameter_keeps_original_separator() {
    let decoded = decode("GRU-RS-CANCER_NPU");
    assert_eq!(
        decoded.title,
        "General research use and clinical care (RS-CANCER, NPU)"
    );
    assert_eq!(
        decoded.long_description,
        "For health/medical/biomedical purposes, including the study of population origins or ancestry. \
         Use of the data is limited to studies of research type \"CANCER\". \
         Use of the data is limited to not-for-profit organizations."
    );

    let decoded = decode("GRU-GS_EUROPE");
    assert_eq!(
        decoded.title,
        "General research use and clinical care (GS_EUROPE)"
    );
}

#[test]
fn parameter_spans_several_tokens() {
    let decoded = decode("HMB-MOR-2025-06-01");
    assert_eq!(
        decoded.title,
        "Health/medical/biomedical research and clinical care (MOR-2025-06-01)"
    );
    assert!(
        decoded
            .long_description
            .ends_with("Requestor agrees not to publish results of studies until the date 2025-06-01.")
    );
}

#[test]
fn time_limit_parameter() {
    let decoded = decode("GRU-TS-12");
    assert_eq!(decoded.title, "General research use and clinical care (TS-12)");
    assert!(
        decoded
            .long_description
            .ends_with(" Use of data is approved for 12 months.")
    );
}

#[test]
fn unknown_symbol() {
    let decoded = decode("XYZ");
    assert_eq!(decoded.title, "ERROR");
    assert_eq!(decoded.long_description, "ERROR: Unknown symbol \"XYZ\"");
    assert!(decoded.flags.present().is_empty());
}

#[test]
fn missing_parameter() {
    let decoded = decode("DS");
    assert_eq!(decoded.title, "ERROR");
    assert!(
        decoded
            .long_description
            .starts_with("ERROR: Missing required parameter")
    );
}

#[test]
fn missing_secondary_parameter_at_end() {
    let decoded = decode("GRU-TS");
    assert_eq!(decoded.error, Some(DecodeError::missing_parameter("TS")));
    assert!(decoded.flags.gru);
}

#[test]
fn secondary_before_primary() {
    let decoded = decode("IRB-GRU");
    assert_eq!(
        decoded.long_description,
        "ERROR: Invalid position for secondary symbol \"IRB\""
    );
    assert_eq!(present(&decoded), vec!["GRU"]);
}

#[test]
fn second_primary() {
    let decoded = decode("GRU-HMB");
    assert_eq!(
        decoded.error,
        Some(DecodeError::invalid_position(SymbolClass::Primary, "HMB"))
    );
    assert_eq!(present(&decoded), vec!["GRU"]);
}

#[test]
fn only_first_error_is_reported_and_scan_completes() {
    let decoded = decode("GRU-XYZ-HMB-NPU");
    assert_eq!(decoded.error, Some(DecodeError::unknown_symbol("XYZ")));
    assert_eq!(decoded.long_description, "ERROR: Unknown symbol \"XYZ\"");
    assert_eq!(present(&decoded), vec!["GRU", "NPU"]);
}

#[test]
fn unknown_leading_token_still_allows_primary() {
    let decoded = decode("XYZ-GRU-IRB");
    assert_eq!(decoded.error, Some(DecodeError::unknown_symbol("XYZ")));
    assert_eq!(present(&decoded), vec!["GRU", "IRB"]);
}

#[test]
fn trailing_separator_is_an_empty_unknown_symbol() {
    let decoded = decode("GRU-");
    assert_eq!(decoded.long_description, "ERROR: Unknown symbol \"\"");
    assert!(decoded.flags.gru);
}

#[test]
fn disease_fields_survive_errors() {
    let decoded = decode("DS-ADHD-RC-HMB");
    assert_eq!(decoded.title, "ERROR");
    assert_eq!(decoded.disease_code, "ADHD-RC");
    assert_eq!(decoded.disease_text, ADHD_RC);
}

#[test]
fn decoding_is_repeatable() {
    let decoder = test_decoder();
    for code in ["DS-ADHD-RC,NPU", "GRU-XYZ-HMB", "NA", "HMB-MOR-2025-06-01"] {
        assert_eq!(decoder.decode(code), decoder.decode(code));
    }
}

#[test]
fn decoder_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConsentDecoder>();

    let decoder = &test_decoder();
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["GRU-IRB", "DS-ADHD-RC,NPU"]
            .into_iter()
            .map(|code| scope.spawn(move || decoder.decode(code)))
            .collect();
        for handle in handles {
            assert!(!handle.join().unwrap().has_error());
        }
    });
}

#[test]
fn bundled_disease_table() {
    if !default_disease_table_path().exists() {
        return; // Skip when the standards directory is relocated
    }
    let entries = load_default_disease_table().unwrap();
    let decoder = ConsentDecoder::with_diseases(&entries);
    let description = decoder.decode("DS-ADHD-RC,NPU");
    assert_eq!(description.disease_text(), ADHD_RC);
    assert_eq!(description.flag(ConsentFlag::Npu), Some(true));
}
