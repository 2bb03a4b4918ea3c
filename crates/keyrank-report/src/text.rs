//! Descriptive text rendering: summary, markdown table and statistics.

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as TextTable};
use keyrank_model::{CellValue, Table, format_numeric};

use crate::options::RenderOptions;
use crate::stats::{ColumnStats, describe};

/// Token printed for missing values.
pub const NULL_TOKEN: &str = "null";

/// Renders a table as markdown-flavoured text.
pub fn render_text(table: &Table, options: &RenderOptions) -> String {
    let mut output: Vec<String> = Vec::new();

    if options.include_stats {
        output.push("## Data Summary".to_string());
        output.push(format!("- **Total Rows**: {}", table.height()));
        output.push(format!("- **Total Columns**: {}", table.width()));
        output.push(format!("- **Columns**: {}", table.columns.join(", ")));
        output.push(String::new());
    }

    output.push("## Data Table".to_string());
    let shown = match options.max_rows {
        Some(limit) if table.height() > limit => {
            output.push(format!(
                "*Showing first {limit} rows out of {} total*",
                table.height()
            ));
            output.push(String::new());
            table.head(limit)
        }
        _ => table.clone(),
    };
    output.push(markdown_table(&shown));

    if options.include_stats {
        let stats = describe(table);
        if !stats.is_empty() {
            output.push(String::new());
            output.push("## Numeric Column Statistics".to_string());
            output.push(stats_table(&stats));
        }
    }

    output.join("\n")
}

/// Markdown pipe table of every row.
pub fn markdown_table(table: &Table) -> String {
    let mut text = new_markdown_table();
    text.set_header(table.columns.iter().map(Cell::new));
    for row in &table.rows {
        text.add_row(table.columns.iter().map(|column| value_cell(row.get(column))));
    }
    text.to_string()
}

fn stats_table(stats: &[ColumnStats]) -> String {
    let mut text = new_markdown_table();
    let mut header = vec![Cell::new("")];
    header.extend(stats.iter().map(|s| Cell::new(&s.column)));
    text.set_header(header);

    let columns: Vec<[Option<f64>; 8]> = stats.iter().map(ColumnStats::values).collect();
    for (idx, label) in ColumnStats::LABELS.iter().enumerate() {
        let mut cells = vec![Cell::new(label)];
        cells.extend(columns.iter().map(|values| {
            let display = values[idx].map_or_else(|| NULL_TOKEN.to_string(), format_stat);
            Cell::new(display).set_alignment(CellAlignment::Right)
        }));
        text.add_row(cells);
    }
    text.to_string()
}

fn new_markdown_table() -> TextTable {
    let mut text = TextTable::new();
    text.load_preset(ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled)
        .force_no_tty();
    text
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Number(n) => Cell::new(format_numeric(*n)).set_alignment(CellAlignment::Right),
        CellValue::Text(s) => Cell::new(s),
        CellValue::Missing => Cell::new(NULL_TOKEN),
    }
}

/// Statistics are shown with at most six decimals.
fn format_stat(value: f64) -> String {
    format_numeric((value * 1e6).round() / 1e6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyrank_model::Row;

    fn sample() -> Table {
        let mut table = Table::new(vec!["关键词".to_string(), "月搜索量".to_string()]);
        table.push_row(Row::new().with("关键词", "slippers women").with("月搜索量", 10000.0));
        table.push_row(Row::new().with("关键词", "house shoes"));
        table.push_row(Row::new().with("关键词", "fuzzy slippers").with("月搜索量", 5000.0));
        table
    }

    #[test]
    fn test_sections_present() {
        let text = render_text(&sample(), &RenderOptions::default());
        assert!(text.contains("## Data Summary"));
        assert!(text.contains("- **Total Rows**: 3"));
        assert!(text.contains("- **Columns**: 关键词, 月搜索量"));
        assert!(text.contains("## Data Table"));
        assert!(text.contains("slippers women"));
        assert!(text.contains("## Numeric Column Statistics"));
        assert!(text.contains("7500"));
    }

    #[test]
    fn test_missing_renders_as_null() {
        let text = render_text(&sample(), &RenderOptions::default().with_stats(false));
        assert!(text.contains("null"));
        assert!(!text.contains("NaN"));
        assert!(!text.contains("## Numeric Column Statistics"));
        assert!(!text.contains("## Data Summary"));
    }

    #[test]
    fn test_row_cap_note() {
        let text = render_text(&sample(), &RenderOptions::default().with_max_rows(Some(2)));
        assert!(text.contains("*Showing first 2 rows out of 3 total*"));
        assert!(!text.contains("fuzzy slippers"));
    }

    #[test]
    fn test_markdown_table_shape() {
        let rendered = markdown_table(&sample());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.starts_with('|') && line.ends_with('|')));
        assert!(lines[1].contains("---"));
    }
}
