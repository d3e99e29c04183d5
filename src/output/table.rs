use comfy_table::{Cell, Color};

use crate::output::format::{
    Ansi, create_styled_table, format_number, header_cell, paint, right_cell, styled_cell,
};
use crate::prompt::SCHEMA_TABLES;
use crate::question::SAMPLES;
use crate::sql::QueryResult;

/// Render a query result; numeric cells are right-aligned
pub(crate) fn result_table(result: &QueryResult, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(
        result
            .columns
            .iter()
            .map(|c| header_cell(c, use_color))
            .collect::<Vec<_>>(),
    );
    for row in &result.rows {
        let cells: Vec<Cell> = row
            .iter()
            .map(|value| {
                let text = value.to_string();
                if value.is_numeric() {
                    right_cell(&text, None, false)
                } else {
                    Cell::new(text)
                }
            })
            .collect();
        table.add_row(cells);
    }
    table.to_string()
}

/// "3 rows | 2ms" under a result table
pub(crate) fn summary_line(result: &QueryResult, use_color: bool) -> String {
    let count = result.rows.len();
    let noun = if count == 1 { "row" } else { "rows" };
    let timing = paint(&format!("{:.0}ms", result.elapsed_ms), Ansi::Cyan, use_color);
    format!("  {} {noun} | {timing}", format_number(count))
}

/// Numbered listing of the sample questions
pub(crate) fn samples_table(use_color: bool) -> String {
    let accent = if use_color { Some(Color::Green) } else { None };
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Tier", use_color),
        header_cell("Sample", use_color),
        header_cell("Question", use_color),
    ]);
    for (i, sample) in SAMPLES.iter().enumerate() {
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), None, false),
            styled_cell(sample.tier.label(), accent, false),
            Cell::new(sample.label),
            Cell::new(sample.question),
        ]);
    }
    table.to_string()
}

/// One table per placement table: column, type, key notes
pub(crate) fn schema_tables(use_color: bool) -> Vec<(&'static str, String)> {
    SCHEMA_TABLES
        .iter()
        .map(|(name, columns)| {
            let mut table = create_styled_table();
            table.set_header(vec![
                header_cell("Column", use_color),
                header_cell("Type", use_color),
                header_cell("Notes", use_color),
            ]);
            for (column, kind, note) in columns.iter() {
                table.add_row(vec![Cell::new(*column), Cell::new(*kind), Cell::new(*note)]);
            }
            (*name, table.to_string())
        })
        .collect()
}
