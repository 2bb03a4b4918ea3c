//! Output form dispatch and multi-file documents.

use keyrank_model::{FormatProfile, OutputForm, Row, Table};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::options::RenderOptions;
use crate::records::{Record, records_value, render_json, to_records};
use crate::text::render_text;

/// A rendered table.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendering {
    Text(String),
    Json(String),
    Records(Vec<Record>),
}

impl Rendering {
    /// Textual form; native records are written as JSON.
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Text(text) | Self::Json(text) => text.clone(),
            Self::Records(records) => {
                let table = records_to_table(records);
                serde_json::to_string_pretty(&records_value(&table, None)).unwrap_or_default()
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Json(text) => Some(text),
            Self::Records(_) => None,
        }
    }
}

fn records_to_table(records: &[Record]) -> Table {
    let mut table = Table::default();
    for record in records {
        let mut row = Row::new();
        for (column, value) in record {
            table.ensure_column(column);
            row.set(column.clone(), value.clone());
        }
        table.push_row(row);
    }
    table
}

/// Renders one table in the requested form. The table is never modified.
pub fn render(table: &Table, form: OutputForm, options: &RenderOptions) -> Result<Rendering> {
    tracing::debug!(?form, rows = table.height(), "Rendering table");
    Ok(match form {
        OutputForm::DescriptiveText => Rendering::Text(render_text(table, options)),
        OutputForm::SerializedRecords => Rendering::Json(render_json(table, options.max_rows)?),
        OutputForm::NativeRecords => Rendering::Records(to_records(table, options.max_rows)),
    })
}

/// One labelled input of a combined document.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSection {
    pub label: String,
    pub profile: FormatProfile,
    pub table: Table,
}

impl FileSection {
    pub fn new(label: impl Into<String>, profile: FormatProfile, table: Table) -> Self {
        Self {
            label: label.into(),
            profile,
            table,
        }
    }
}

/// Renders several labelled tables into one document.
///
/// Text output has a `# File: <label>` section per table separated by `---`.
/// Both record forms produce a JSON array of `{file, format_type, data}`.
pub fn render_many(
    sections: &[FileSection],
    form: OutputForm,
    options: &RenderOptions,
) -> Result<Rendering> {
    match form {
        OutputForm::DescriptiveText => {
            let parts: Vec<String> = sections
                .iter()
                .map(|section| {
                    format!(
                        "# File: {}\n\n{}",
                        section.label,
                        render_text(&section.table, options)
                    )
                })
                .collect();
            Ok(Rendering::Text(parts.join("\n\n---\n\n")))
        }
        OutputForm::SerializedRecords | OutputForm::NativeRecords => {
            let files: Vec<Value> = sections
                .iter()
                .map(|section| {
                    let mut entry = Map::new();
                    entry.insert("file".to_string(), Value::from(section.label.clone()));
                    entry.insert(
                        "format_type".to_string(),
                        Value::from(section.profile.as_str()),
                    );
                    entry.insert(
                        "data".to_string(),
                        records_value(&section.table, options.max_rows),
                    );
                    Value::Object(entry)
                })
                .collect();
            Ok(Rendering::Json(serde_json::to_string_pretty(&files)?))
        }
    }
}
