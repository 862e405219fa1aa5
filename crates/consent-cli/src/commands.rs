use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use consent_cli::batch::{DecodeRun, decode_codes, read_codes};
use consent_core::{ConsentDecoder, SymbolTable};
use consent_standards::{load_default_disease_table, load_disease_table};

use crate::cli::DecodeArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_symbols() -> Result<()> {
    let symbols = SymbolTable::standard();
    let mut definitions: Vec<_> = symbols.definitions().collect();
    definitions.sort_by_key(|def| (def.class.as_str(), def.name));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Symbol"),
        header_cell("Class"),
        header_cell("Parameter"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for def in definitions {
        table.add_row(vec![
            def.name.to_string(),
            def.class.to_string(),
            def.param.to_string(),
            def.short_text.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<DecodeRun> {
    let mut codes = args.codes.clone();
    if let Some(path) = &args.input {
        codes.extend(read_codes(path)?);
    }
    if codes.is_empty() {
        bail!("no consent codes given (pass CODE arguments or --input FILE)");
    }

    let span = info_span!("decode", count = codes.len());
    let _guard = span.enter();

    let diseases = match &args.diseases {
        Some(path) => load_disease_table(path)
            .with_context(|| format!("load disease table: {}", path.display()))?,
        None => load_default_disease_table().context("load bundled disease table")?,
    };
    info!(diseases = diseases.len(), "disease table loaded");

    let decoder = ConsentDecoder::with_diseases(&diseases);
    Ok(decode_codes(&decoder, &codes))
}
