//! The consent symbol catalog.
//!
//! Names and texts follow the data use limitation vocabulary used in dbGaP
//! and AnVIL consent groups.

use consent_model::SymbolDefinition;

/// Every known consent symbol. Primary symbols come first.
pub static SYMBOL_DEFINITIONS: [SymbolDefinition; 20] = [
    SymbolDefinition::primary("NRES", "No restrictions", "No restrictions on data use."),
    SymbolDefinition::primary(
        "GRU",
        "General research use and clinical care",
        "For health/medical/biomedical purposes, including the study of population origins or ancestry.",
    ),
    SymbolDefinition::primary(
        "HMB",
        "Health/medical/biomedical research and clinical care",
        "Use of the data is limited to health/medical/biomedical purposes; does not include the study of population origins or ancestry.",
    ),
    SymbolDefinition::primary("DS", "Disease-specific research and clinical care", "")
        .with_param("Use of the data must be related to []."),
    SymbolDefinition::primary(
        "POA",
        "Population origins/ancestry research",
        "Use of the data is limited to the study of population origins or ancestry.",
    ),
    SymbolDefinition::secondary("RS", "Other research-specific restrictions", "")
        .with_param("Use of the data is limited to studies of research type \"[]\"."),
    SymbolDefinition::secondary(
        "RUO",
        "Research use only",
        "Use of data is limited to research purposes (e.g., does not include its use in clinical care).",
    ),
    SymbolDefinition::secondary(
        "NMDS",
        "No \"general methods\" research",
        "Use of the data includes methods development research (e.g., development of software or algorithms) ONLY within the bounds of other data use limitations.",
    ),
    SymbolDefinition::secondary(
        "GSO",
        "Genetic studies only",
        "Use of the data is limited to genetic studies only (i.e., no \"phenotype-only\" research).",
    ),
    SymbolDefinition::secondary(
        "NPU",
        "Not-for-profit use only",
        "Use of the data is limited to not-for-profit organizations.",
    ),
    SymbolDefinition::secondary(
        "PUB",
        "Publication required",
        "Requestor agrees to make results of studies using the data available to the larger scientific community.",
    ),
    SymbolDefinition::secondary(
        "COL",
        "Collaboration required",
        "Requestor must agree to collaboration with the primary study investigator(s).",
    ),
    SymbolDefinition::secondary(
        "IRB",
        "Ethics approval required",
        "Requestor must provide documentation of local IRB/REC approval.",
    ),
    SymbolDefinition::secondary("GS", "Geographical restrictions", "")
        .with_param("Use of the data is limited to within geographic region \"[]\"."),
    SymbolDefinition::secondary("MOR", "Publication moratorium/embargo", "")
        .with_param("Requestor agrees not to publish results of studies until the date []."),
    SymbolDefinition::secondary("TS", "Time limits on use", "")
        .with_param("Use of data is approved for [] months."),
    SymbolDefinition::secondary(
        "US",
        "User-specific restrictions",
        "Use of data is limited to use by approved users.",
    ),
    SymbolDefinition::secondary(
        "PS",
        "Project-specific restrictions",
        "Use of data is limited to use within an approved project.",
    ),
    SymbolDefinition::secondary(
        "IS",
        "Institution-specific restrictions",
        "Use of data is limited to use within an approved institution.",
    ),
    SymbolDefinition::secondary(
        "MDS",
        "",
        "Use of the data includes methods development research (e.g., development of software or algorithms)",
    ),
];

/// Symbol whose parameter is resolved against the disease table.
pub const DISEASE_SYMBOL: &str = "DS";

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use consent_model::{PARAM_PLACEHOLDER, SymbolClass};

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<&str> = SYMBOL_DEFINITIONS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), SYMBOL_DEFINITIONS.len());
    }

    #[test]
    fn five_primary_symbols() {
        let primary: Vec<&str> = SYMBOL_DEFINITIONS
            .iter()
            .filter(|d| d.class == SymbolClass::Primary)
            .map(|d| d.name)
            .collect();
        assert_eq!(primary, vec!["NRES", "GRU", "HMB", "DS", "POA"]);
    }

    #[test]
    fn parameterized_symbols_have_one_placeholder() {
        let mut parameterized = Vec::new();
        for def in &SYMBOL_DEFINITIONS {
            if def.requires_param() {
                assert_eq!(def.long_text.raw().matches(PARAM_PLACEHOLDER).count(), 1);
                parameterized.push(def.name);
            }
        }
        assert_eq!(parameterized, vec!["DS", "RS", "GS", "MOR", "TS"]);
    }
}
