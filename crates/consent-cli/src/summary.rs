use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use consent_cli::batch::{DecodeRun, DecodedCode};
use consent_model::ConsentDescription;

pub fn print_summary(run: &DecodeRun) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Title"),
        header_cell("Flags"),
        header_cell("Disease"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for result in &run.results {
        table.add_row(vec![
            code_cell(&result.code),
            Cell::new(result.description.title()),
            flags_cell(&result.description),
            disease_cell(&result.description),
            status_cell(result),
        ]);
    }
    println!("{table}");
    print_long_descriptions(run);
    println!(
        "{} code(s), {} with errors, {} unspecified",
        run.results.len(),
        run.error_count(),
        run.unspecified_count()
    );
}

fn print_long_descriptions(run: &DecodeRun) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Description")]);
    apply_table_style(&mut table);
    for result in &run.results {
        table.add_row(vec![
            code_cell(&result.code),
            Cell::new(result.description.long_description()),
        ]);
    }
    println!();
    println!("Descriptions:");
    println!("{table}");
}

fn code_cell(code: &str) -> Cell {
    if code.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(code)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn flags_cell(description: &ConsentDescription) -> Cell {
    match description.decoded() {
        Some(decoded) => {
            let flags: Vec<&str> = decoded
                .flags
                .present()
                .into_iter()
                .map(|flag| flag.symbol())
                .collect();
            if flags.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(flags.join(", "))
            }
        }
        None => dim_cell("-"),
    }
}

fn disease_cell(description: &ConsentDescription) -> Cell {
    match description.decoded() {
        Some(decoded) if !decoded.disease_text.is_empty() => Cell::new(format!(
            "{} ({})",
            decoded.disease_text, decoded.disease_code
        )),
        Some(decoded) if !decoded.disease_code.is_empty() => {
            Cell::new(&decoded.disease_code).fg(Color::Yellow)
        }
        _ => dim_cell("-"),
    }
}

fn status_cell(result: &DecodedCode) -> Cell {
    if result.has_error() {
        Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else if result.description.is_unspecified() {
        dim_cell("UNSPECIFIED")
    } else {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
