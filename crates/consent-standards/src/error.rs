#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TSV {path}: {message}")]
    Tsv { path: PathBuf, message: String },

    #[error("missing full disease name in {path} at line {line}")]
    MissingColumn { path: PathBuf, line: u64 },

    #[error("empty disease abbreviation in {path} at line {line}")]
    EmptyAbbreviation { path: PathBuf, line: u64 },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn tsv(path: impl Into<PathBuf>, source: &csv::Error) -> Self {
        Self::Tsv {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
