use ordbok_types::DictionaryEntry;

use crate::layout::SheetLayout;

/// Split one CSV line into fields.
///
/// A `"` toggles quoted mode and is dropped; commas inside quotes stay in the
/// field. There is no escape handling, so `""` simply toggles twice.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

fn clean_field(field: &str) -> String {
    field.replace('"', "").trim().to_string()
}

/// Parse a gviz CSV export into entries.
///
/// The first line is the header and is always skipped. Rows that don't map
/// to an entry are dropped without error.
pub fn parse_csv(text: &str, layout: &SheetLayout) -> Vec<DictionaryEntry> {
    let mut entries = Vec::new();

    for (index, line) in text.split('\n').enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<String> = tokenize_line(line)
            .iter()
            .map(|f| clean_field(f))
            .collect();

        if index <= 3 {
            tracing::debug!("CSV row {} fields: {:?}", index, fields);
        }

        match layout.build_entry(&fields) {
            Some(entry) => entries.push(entry),
            None => tracing::trace!("Skipping CSV row {}", index),
        }
    }

    tracing::debug!("Parsed {} entries from CSV", entries.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\"\",\"\",\"Tittel på ord\",\"Ordklasse\",\"Bøyninger\",\"Tilleggsinformasjon\",\"Definisjon 1\",\"Definisjon 2\",\"Definisjon 3\",\"Definisjon 4\",\"Definisjon 5\"";

    #[test]
    fn quoted_comma_stays_in_field() {
        let fields = tokenize_line("1,2,\"a,b\",c,d,e,f,g");
        assert_eq!(fields, vec!["1", "2", "a,b", "c", "d", "e", "f", "g"]);
    }

    #[test]
    fn trailing_comma_yields_empty_field() {
        assert_eq!(tokenize_line("a,b,"), vec!["a", "b", ""]);
        assert_eq!(tokenize_line(""), vec![""]);
    }

    #[test]
    fn returns_data_rows_in_order() {
        let csv = format!(
            "{HEADER}\n\
             \"FALSE\",\"\",\"Agn\",\"Substantiv\",\"\",\"\",\"Tynt skall rundt kjernen på korn\",\"\",\"\",\"\",\"\"\n\
             \"FALSE\",\"\",\"Akk\",\"Interjeksjon\",\"\",\"\",\"Uttrykk for sorg, fortvilelse eller hjelpesløshet\",\"\",\"\",\"\",\"\"\n\
             \"FALSE\",\"\",\"Akte\",\"Verb\",\"aktet, atselse\",\"\",\"Regne seg selv som\",\"Ta hensyn til\",\"\",\"\",\"\"\n"
        );

        let entries = parse_csv(&csv, &SheetLayout::EXPORT);
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["Agn", "Akk", "Akte"]);

        assert_eq!(
            entries[1].definition,
            "Uttrykk for sorg, fortvilelse eller hjelpesløshet"
        );
        assert_eq!(entries[2].inflections.as_deref(), Some("aktet, atselse"));
        assert_eq!(entries[2].definition2.as_deref(), Some("Ta hensyn til"));
    }

    #[test]
    fn skips_header_blank_and_sentinel_rows() {
        let csv = format!(
            "{HEADER}\r\n\
             \r\n\
             \"\",\"\",\"TRUE\",\"Verb\",\"\",\"\",\"Definisjon\"\r\n\
             \"\",\"\",\"Tittel på ord\",\"\",\"\",\"\",\"Definisjon 1\"\r\n\
             \"\",\"\",\"Ord\",\"Substantiv\",\"\",\"\",\"\"\r\n\
             \"\",\"\",\"Kort\",\"\",\"\"\r\n\
             \"\",\"\",\"\",\"\",\"\",\"\",\"Mangler ord\"\r\n\
             \"\",\"\",\"Almisse\",\"Substantiv\",\"\",\"\",\"Gave til vanskeligstilte\"\r\n"
        );

        let entries = parse_csv(&csv, &SheetLayout::EXPORT);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "Almisse");
        assert_eq!(entries[0].definition, "Gave til vanskeligstilte");
    }

    #[test]
    fn header_row_is_skipped_even_when_it_looks_like_data() {
        let csv = "x,y,Ord,Verb,,,Definisjon\nx,y,Annet,Verb,,,Mer";
        let entries = parse_csv(csv, &SheetLayout::EXPORT);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "Annet");
    }

    #[test]
    fn fields_are_trimmed() {
        let csv = "header\n,,  Akk  , Interjeksjon ,,,  Uttrykk for sorg  ";
        let entries = parse_csv(csv, &SheetLayout::EXPORT);
        assert_eq!(entries[0].word, "Akk");
        assert_eq!(entries[0].word_class, "Interjeksjon");
        assert_eq!(entries[0].definition, "Uttrykk for sorg");
    }
}
