use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use textudf_analytics::{Language, Sentiment, TextReport};
use textudf_transform::Operation;

use crate::csv_column::CsvSummary;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Every operation with its description.
pub fn operations_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Operation"), header_cell("Description")]);
    apply_table_style(&mut table);
    for op in Operation::ALL {
        let name = Cell::new(op.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold);
        table.add_row(vec![name, Cell::new(op.description())]);
    }
    table
}

pub fn report_table(report: &TextReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    let keywords = if report.keywords.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(report.keywords.join(", "))
    };
    table.add_row(vec![Cell::new("Sentiment"), sentiment_cell(report.sentiment)]);
    table.add_row(vec![Cell::new("Language"), language_cell(report.language)]);
    table.add_row(vec![Cell::new("Keywords"), keywords]);
    table.add_row(vec![
        Cell::new("Meaningful words"),
        Cell::new(report.meaningful_words),
    ]);
    table.add_row(vec![Cell::new("Characters"), Cell::new(report.characters)]);
    table
}

pub fn csv_summary_table(summary: &CsvSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Changed"),
        header_cell("NULL in"),
        header_cell("NULL out"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(summary.rows).add_attribute(Attribute::Bold),
        Cell::new(summary.changed),
        count_cell(summary.null_inputs),
        count_cell(summary.null_outputs),
    ]);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn sentiment_cell(sentiment: Sentiment) -> Cell {
    match sentiment {
        Sentiment::Positive => Cell::new(sentiment).fg(Color::Green),
        Sentiment::Negative => Cell::new(sentiment).fg(Color::Red),
        Sentiment::Neutral => dim_cell(sentiment),
    }
}

fn language_cell(language: Language) -> Cell {
    match language {
        Language::Unknown => dim_cell(language),
        _ => Cell::new(language),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
