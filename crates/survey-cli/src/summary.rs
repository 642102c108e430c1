use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_model::{FieldTally, SurveyField};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Survey: {}", result.survey.display());
    println!("Cities: {}", result.cities.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Resolved"),
        header_cell("Sentinel"),
        header_cell("Total"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let summary = &result.summary;
    let tallies = [
        (SurveyField::Salary, summary.salary),
        (SurveyField::PatientNurseRatio, summary.patient_nurse_ratio),
        (SurveyField::Location, summary.location),
    ];
    for (field, tally) in tallies {
        table.add_row(tally_row(field, tally, result.missing_fields.contains(&field)));
    }
    table.add_row(vec![
        Cell::new("Rows read")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(summary.rows_read).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Records written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(summary.records_written).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.missing_fields.is_empty() {
        eprintln!("Missing survey columns:");
        for field in &result.missing_fields {
            eprintln!("- {field}");
        }
    }
}

/// Prints label/value pairs for a single normalized answer.
pub fn print_details(rows: Vec<(&str, String)>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    for (label, value) in rows {
        table.add_row(vec![header_cell(label), Cell::new(value)]);
    }
    println!("{table}");
}

fn tally_row(field: SurveyField, tally: FieldTally, missing: bool) -> Vec<Cell> {
    let field_cell = if missing {
        Cell::new(format!("{field} (no column)")).fg(Color::DarkGrey)
    } else {
        Cell::new(field)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    };
    vec![
        field_cell,
        count_cell(tally.resolved, Color::Green),
        count_cell(tally.sentinel, Color::Yellow),
        Cell::new(tally.total()),
    ]
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
