use ordbok_types::DictionaryEntry;
use serde_json::Value;

/// Boolean cell text the sheet's checkbox columns leak into the word column
pub const TRUE_SENTINEL: &str = "TRUE";

/// Caption of the word column in the sheet's header row
pub const HEADER_CAPTION: &str = "Tittel på ord";

/// Render a cell value the way the CSV export would
pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            _ => n.to_string(),
        },
        _ => String::new(),
    }
}

/// Column convention of the source sheet.
///
/// The word sits at `word_column`, followed by word class, inflections,
/// additional info and five definition columns. This is a property of the
/// particular spreadsheet, not of the CSV or JSON formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub word_column: usize,
    /// Rows with fewer fields are skipped
    pub min_fields: usize,
    pub header_caption: &'static str,
}

impl SheetLayout {
    /// Full-width gviz export: two leading checkbox columns, word in column C
    pub const EXPORT: SheetLayout = SheetLayout {
        word_column: 2,
        min_fields: 7,
        header_caption: HEADER_CAPTION,
    };

    /// Values API reading the `C:K` range, word in the first column
    pub const VALUES_RANGE: SheetLayout = SheetLayout {
        word_column: 0,
        min_fields: 2,
        header_caption: HEADER_CAPTION,
    };

    /// Whether `word` marks a header or checkbox row rather than data
    pub fn is_sentinel(&self, word: &str) -> bool {
        word == TRUE_SENTINEL || word == self.header_caption
    }

    /// Map one row of cleaned fields to an entry.
    ///
    /// Returns `None` for rows that are too short, have no word or
    /// definition, or carry a sentinel word.
    pub fn build_entry<S: AsRef<str>>(&self, fields: &[S]) -> Option<DictionaryEntry> {
        if fields.len() < self.min_fields {
            return None;
        }

        let field = |offset: usize| {
            fields
                .get(self.word_column + offset)
                .map(|f| f.as_ref())
                .unwrap_or("")
        };
        let optional = |offset: usize| -> Option<String> {
            let value = field(offset);
            (!value.is_empty()).then(|| value.to_string())
        };

        let word = field(0);
        let definition = field(4);
        if word.is_empty() || definition.is_empty() || self.is_sentinel(word) {
            return None;
        }

        Some(DictionaryEntry {
            word: word.to_string(),
            word_class: field(1).to_string(),
            inflections: optional(2),
            additional_info: optional(3),
            definition: definition.to_string(),
            definition2: optional(5),
            definition3: optional(6),
            definition4: optional(7),
            definition5: optional(8),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_columns_after_word_offset() {
        let row = [
            "", "", "Akte", "Verb", "aktet", "", "Regne seg selv som", "Ta hensyn til", "",
        ];
        let entry = SheetLayout::EXPORT.build_entry(&row).unwrap();

        assert_eq!(entry.word, "Akte");
        assert_eq!(entry.word_class, "Verb");
        assert_eq!(entry.inflections.as_deref(), Some("aktet"));
        assert_eq!(entry.additional_info, None);
        assert_eq!(entry.definition2.as_deref(), Some("Ta hensyn til"));
        assert_eq!(entry.definition3, None);
        assert_eq!(entry.definition5, None);
    }

    #[test]
    fn rejects_sentinels_and_short_rows() {
        let layout = SheetLayout::EXPORT;
        assert!(layout.build_entry(&["", "", "TRUE", "", "", "", "def"]).is_none());
        assert!(
            layout
                .build_entry(&["", "", HEADER_CAPTION, "", "", "", "def"])
                .is_none()
        );
        assert!(layout.build_entry(&["", "", "Ord", "", "", "def"]).is_none());
    }

    #[test]
    fn requires_definition() {
        let row = ["", "", "Ord", "Substantiv", "", "", ""];
        assert!(SheetLayout::EXPORT.build_entry(&row).is_none());
    }

    #[test]
    fn values_range_starts_at_first_column() {
        let row = ["Akk", "Interjeksjon", "", "", "Uttrykk for sorg"];
        let entry = SheetLayout::VALUES_RANGE.build_entry(&row).unwrap();
        assert_eq!(entry.word, "Akk");
        assert_eq!(entry.definition, "Uttrykk for sorg");
    }
}
