//! Header row cleanup.

use keyrank_model::CellValue;

/// Turns a header cell into a column name.
///
/// Text is trimmed (BOM included), numbers are formatted, and blank cells get
/// a positional `Unnamed: <idx>` placeholder.
pub fn header_name(cell: &CellValue, idx: usize) -> String {
    match cell.to_text() {
        Some(text) => {
            let trimmed = text.trim().trim_matches('\u{feff}').trim();
            if trimmed.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                trimmed.to_string()
            }
        }
        None => format!("Unnamed: {idx}"),
    }
}

/// Makes header names unique by suffixing repeats with `.1`, `.2`, ...
pub fn dedupe_headers(names: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
            continue;
        }
        let mut counter = 1usize;
        let mut candidate = format!("{name}.{counter}");
        while seen.contains(&candidate) {
            counter += 1;
            candidate = format!("{name}.{counter}");
        }
        seen.push(candidate);
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_name_trims_and_fills_blanks() {
        assert_eq!(header_name(&CellValue::Text(" 关键词 ".into()), 0), "关键词");
        assert_eq!(header_name(&CellValue::Missing, 3), "Unnamed: 3");
        assert_eq!(header_name(&CellValue::Number(2024.0), 1), "2024");
        assert_eq!(header_name(&CellValue::Text("\u{feff}A".into()), 0), "A");
    }

    #[test]
    fn test_dedupe_headers() {
        let names = vec![
            "A".to_string(),
            "B".to_string(),
            "A".to_string(),
            "A".to_string(),
        ];
        assert_eq!(dedupe_headers(names), vec!["A", "B", "A.1", "A.2"]);
    }
}
