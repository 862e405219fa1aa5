//! Decoding batches of consent codes for the CLI.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use consent_core::ConsentDecoder;
use consent_model::ConsentDescription;

/// One input code and its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedCode {
    pub code: String,
    #[serde(flatten)]
    pub description: ConsentDescription,
}

impl DecodedCode {
    pub fn has_error(&self) -> bool {
        self.description.has_error()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DecodeRun {
    pub results: Vec<DecodedCode>,
}

impl DecodeRun {
    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.has_error()).count()
    }

    pub fn unspecified_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.description.is_unspecified())
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Read codes from a file, one per line. Blank lines are kept as empty codes.
pub fn read_codes(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read codes: {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Decode every code in order.
pub fn decode_codes(decoder: &ConsentDecoder, codes: &[String]) -> DecodeRun {
    let mut results = Vec::with_capacity(codes.len());
    for code in codes {
        let description = decoder.decode(code);
        match description.error() {
            Some(error) => warn!(code = %code, %error, "consent code has errors"),
            None => debug!(code = %code, title = description.title(), "decoded"),
        }
        results.push(DecodedCode {
            code: code.clone(),
            description,
        });
    }
    let run = DecodeRun { results };
    info!(
        codes = run.results.len(),
        errors = run.error_count(),
        unspecified = run.unspecified_count(),
        "decode complete"
    );
    run
}

/// Render results as a pretty-printed JSON array.
pub fn render_json(run: &DecodeRun) -> Result<String> {
    serde_json::to_string_pretty(&run.results).context("serialize decode results")
}
