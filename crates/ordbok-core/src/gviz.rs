use ordbok_types::DictionaryEntry;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::layout::{SheetLayout, cell_text};

const RESPONSE_PREFIX: &str = "google.visualization.Query.setResponse(";

// Visualization query response, as far as we read it
#[derive(Debug, Deserialize)]
struct GvizResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    errors: Vec<GvizError>,
    table: Option<GvizTable>,
}

#[derive(Debug, Deserialize)]
struct GvizError {
    #[serde(default)]
    reason: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Option<Vec<Option<GvizCell>>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Option<Value>,
}

/// Extract the JSON body from `...setResponse(<json>);`
pub fn strip_wrapper(text: &str) -> Result<&str, ParseError> {
    let start = text
        .find(RESPONSE_PREFIX)
        .ok_or(ParseError::MissingWrapper)?
        + RESPONSE_PREFIX.len();

    text[start..]
        .trim_end()
        .trim_end_matches(';')
        .trim_end()
        .strip_suffix(')')
        .ok_or(ParseError::MissingWrapper)
}

/// Parse a wrapped gviz JSON response into entries
pub fn parse_gviz(text: &str, layout: &SheetLayout) -> Result<Vec<DictionaryEntry>, ParseError> {
    let body = strip_wrapper(text)?;
    let response: GvizResponse = serde_json::from_str(body)?;

    if response.status.as_deref() == Some("error") {
        let reasons = response
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.reason, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ParseError::QueryFailed(reasons));
    }

    let table = response.table.ok_or(ParseError::MissingTable)?;
    let mut entries = Vec::new();

    for row in table.rows {
        let Some(cells) = row.c else {
            continue;
        };

        let fields: Vec<String> = cells
            .iter()
            .map(|cell| {
                cell.as_ref()
                    .and_then(|c| c.v.as_ref())
                    .map(cell_text)
                    .unwrap_or_default()
            })
            .collect();

        if let Some(entry) = layout.build_entry(&fields) {
            entries.push(entry);
        }
    }

    tracing::debug!("Parsed {} entries from JSON", entries.len());
    Ok(entries)
}
