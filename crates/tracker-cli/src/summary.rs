//! Human-readable summary rendering for validation outcomes.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, ColumnConstraint, Color, ContentArrangement, Table, Width,
};

use crate::commands::BatchOutcome;

pub fn print_summary(outcome: &BatchOutcome) {
    println!("Events validated: {}", outcome.batch_len);
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }

    if outcome.report.is_empty() {
        println!("No validation errors found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Index"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);

    for report in &outcome.report.reports {
        table.add_row(vec![
            Cell::new(report.index),
            code_cell(report.code.as_str()),
            Cell::new(report.message()),
        ]);
    }

    println!();
    println!("Validation errors: {}", outcome.report.error_count());
    println!("{table}");
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(75)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn code_cell(code: &str) -> Cell {
    // E9999 marks an isolated internal fault rather than a business rule.
    if code == "E9999" {
        Cell::new(code)
            .fg(Color::Magenta)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(code).fg(Color::Red).add_attribute(Attribute::Bold)
    }
}
