#![deny(unsafe_code)]

//! Disease abbreviation table loading.
//!
//! The table is a tab-separated file with a header row. The first column is
//! the abbreviation (pieces joined by `-`, e.g. `ADHD-RC`), the second the
//! full disease name. Header names are not significant.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::StandardsError;
use crate::paths::default_disease_table_path;

/// One row of the disease abbreviation table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DiseaseEntry {
    pub abbreviation: String,
    pub name: String,
}

impl DiseaseEntry {
    pub fn new(abbreviation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            name: name.into(),
        }
    }
}

/// Load the disease table bundled under the standards root.
pub fn load_default_disease_table() -> Result<Vec<DiseaseEntry>, StandardsError> {
    load_disease_table(&default_disease_table_path())
}

/// Load a disease table from a TSV file.
pub fn load_disease_table(path: &Path) -> Result<Vec<DiseaseEntry>, StandardsError> {
    let file = std::fs::File::open(path).map_err(|e| StandardsError::io(path, e))?;
    let entries = parse_disease_table(file, path)?;
    debug!(
        path = %path.display(),
        entries = entries.len(),
        "loaded disease table"
    );
    Ok(entries)
}

/// Parse disease table rows from any reader.
///
/// `source` is only used for error messages.
pub fn parse_disease_table<R: Read>(
    reader: R,
    source: &Path,
) -> Result<Vec<DiseaseEntry>, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| StandardsError::tsv(source, &e))?;
        let line = record.position().map_or(0, csv::Position::line);
        let abbreviation = record
            .get(0)
            .map(str::trim)
            .unwrap_or_default();
        if abbreviation.is_empty() {
            // A fully blank line is not a row.
            if record.iter().all(|value| value.trim().is_empty()) {
                continue;
            }
            return Err(StandardsError::EmptyAbbreviation {
                path: source.to_path_buf(),
                line,
            });
        }
        let Some(name) = record.get(1) else {
            return Err(StandardsError::MissingColumn {
                path: source.to_path_buf(),
                line,
            });
        };
        entries.push(DiseaseEntry::new(abbreviation, name.trim()));
    }
    Ok(entries)
}
