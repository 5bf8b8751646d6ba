use ordbok_types::DictionaryEntry;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::layout::{SheetLayout, cell_text};

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Parse a Sheets values API response. The first row is the header.
pub fn parse_values(
    text: &str,
    layout: &SheetLayout,
) -> Result<Vec<DictionaryEntry>, ParseError> {
    let range: ValueRange = serde_json::from_str(text)?;

    if range.values.len() < 2 {
        return Ok(Vec::new());
    }

    let entries: Vec<DictionaryEntry> = range
        .values
        .iter()
        .skip(1)
        .filter_map(|row| {
            let fields: Vec<String> = row.iter().map(cell_text).collect();
            layout.build_entry(&fields)
        })
        .collect();

    tracing::debug!("Parsed {} entries from values API", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_and_sentinels() {
        let text = r#"{
            "range": "Ordforklaringer!C1:K5",
            "majorDimension": "ROWS",
            "values": [
                ["Tittel på ord", "Ordklasse", "Bøyninger", "Tilleggsinformasjon", "Definisjon 1"],
                ["Akk", "Interjeksjon", "", "", "Uttrykk for sorg"],
                ["TRUE", "Verb", "", "", "x"],
                ["Akte"],
                ["Almisse", "Substantiv", "", "", "Gave til vanskeligstilte", "Helhjertet godjømmelse"]
            ]
        }"#;

        let entries = parse_values(text, &SheetLayout::VALUES_RANGE).unwrap();
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["Akk", "Almisse"]);
        assert_eq!(
            entries[1].definition2.as_deref(),
            Some("Helhjertet godjømmelse")
        );
    }

    #[test]
    fn header_only_or_empty_range_yields_nothing() {
        let layout = SheetLayout::VALUES_RANGE;
        assert!(parse_values(r#"{"range":"A1:B1"}"#, &layout).unwrap().is_empty());
        assert!(
            parse_values(r#"{"values":[["Tittel på ord"]]}"#, &layout)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn boolean_true_word_is_a_sentinel() {
        let text = r#"{"values":[["h"],[true,"Verb","","","def"],[false,"Verb","","","def"]]}"#;
        let entries = parse_values(text, &SheetLayout::VALUES_RANGE).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "FALSE");
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(matches!(
            parse_values("<html>", &SheetLayout::VALUES_RANGE),
            Err(ParseError::Json(_))
        ));
    }
}
