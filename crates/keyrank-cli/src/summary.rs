use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use keyrank_model::RankedKeyword;

use crate::types::RankResult;

pub fn print_summary(result: &RankResult) {
    let bundle = &result.document.bundle;
    let metadata = &bundle.metadata;
    println!("Brand: {}", bundle.brand_name);
    println!("Product: {}", bundle.product_type);
    println!(
        "Keywords: {} selected of {} analyzed",
        result.selected.len(),
        metadata.total_keywords_analyzed
    );
    if let Some(path) = &result.output_path {
        println!("Bundle: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Keyword"),
        header_cell("Score"),
        header_cell("Monthly Search"),
        header_cell("Purchase Rate"),
        header_cell("Weekly Search"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 2, 3, 4, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (rank, keyword) in result.selected.iter().enumerate() {
        table.add_row(keyword_row(rank + 1, keyword));
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Average").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.0}", metadata.average_monthly_search))
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}%", metadata.average_purchase_rate * 100.0))
            .add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    println!("{table}");

    if !metadata.competitor_asins.is_empty() {
        println!("Competitor ASINs: {}", metadata.competitor_asins.join(", "));
    }
}

fn keyword_row(rank: usize, keyword: &RankedKeyword) -> Vec<Cell> {
    vec![
        dim_cell(rank),
        Cell::new(&keyword.keyword).fg(Color::Blue),
        score_cell(keyword.score),
        metric_cell(keyword.monthly_volume().map(|v| format!("{v:.0}"))),
        metric_cell(keyword.purchase_rate().map(|v| format!("{:.2}%", v * 100.0))),
        metric_cell(keyword.metrics.weekly_volume.map(|v| format!("{v:.0}"))),
    ]
}

fn score_cell(score: f64) -> Cell {
    let color = if score >= 0.5 {
        Color::Green
    } else if score >= 0.2 {
        Color::Yellow
    } else {
        Color::DarkGrey
    };
    Cell::new(format!("{score:.4}")).fg(color)
}

fn metric_cell(value: Option<String>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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
