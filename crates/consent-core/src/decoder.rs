//! Consent code decoding entry point.

use consent_model::ConsentDescription;
use consent_standards::DiseaseEntry;
use tracing::debug;

use crate::classifier::{SymbolTable, classify};
use crate::sequence::decode_sequence;
use crate::tokenizer::tokenize;
use crate::trie::DiseaseTrie;

/// Codes that mean "not filled in" and are never parsed.
pub const SENTINEL_CODES: [&str; 4] = ["", "TBD", "NA", "Unspecified"];

pub fn is_sentinel(code: &str) -> bool {
    SENTINEL_CODES.contains(&code)
}

/// Decodes consent codes against a fixed symbol catalog and disease table.
///
/// Both lookups are immutable after construction, so one decoder can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ConsentDecoder {
    symbols: SymbolTable,
    diseases: DiseaseTrie,
}

impl ConsentDecoder {
    pub fn new(symbols: SymbolTable, diseases: DiseaseTrie) -> Self {
        Self { symbols, diseases }
    }

    /// Decoder over the standard symbol catalog and the given disease rows.
    pub fn with_diseases(entries: &[DiseaseEntry]) -> Self {
        let diseases = DiseaseTrie::from_entries(
            entries
                .iter()
                .map(|entry| (entry.abbreviation.as_str(), entry.name.as_str())),
        );
        Self::new(SymbolTable::standard(), diseases)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn diseases(&self) -> &DiseaseTrie {
        &self.diseases
    }

    /// Describe `code`.
    ///
    /// Never fails: problems are reported inside the returned record.
    pub fn decode(&self, code: &str) -> ConsentDescription {
        if is_sentinel(code) {
            return ConsentDescription::Unspecified;
        }
        let tokens = tokenize(code);
        let resolved = classify(&tokens, &self.symbols);
        let decoded = decode_sequence(&resolved, &self.diseases);
        debug!(
            code,
            tokens = resolved.len(),
            error = decoded.error.as_ref().map(ToString::to_string),
            "decoded consent code"
        );
        ConsentDescription::Decoded(decoded)
    }
}
