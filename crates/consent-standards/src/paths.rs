//! Standards directory path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "CONSENT_STANDARDS_DIR";

/// File name of the disease abbreviation table inside `diseases/`.
pub const DISEASE_TABLE_FILE: &str = "disease_abbrev_mapping.tsv";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `CONSENT_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Default location of the disease abbreviation table.
pub fn default_disease_table_path() -> PathBuf {
    standards_root().join("diseases").join(DISEASE_TABLE_FILE)
}
