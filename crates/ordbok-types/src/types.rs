use serde::{Deserialize, Serialize};

/// One dictionary word as read from the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    pub word_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflections: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition5: Option<String>,
}

impl DictionaryEntry {
    /// All non-empty definitions, primary first
    pub fn definitions(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.definition.as_str())
            .chain(
                [
                    &self.definition2,
                    &self.definition3,
                    &self.definition4,
                    &self.definition5,
                ]
                .into_iter()
                .filter_map(|d| d.as_deref()),
            )
            .filter(|d| !d.is_empty())
    }
}

/// Messages from the loader task to the renderer
#[derive(Debug, Clone)]
pub enum AppEvent {
    Loading { source: String },
    Loaded(Vec<DictionaryEntry>),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> DictionaryEntry {
        DictionaryEntry {
            word: "Akte".to_string(),
            word_class: "Verb".to_string(),
            inflections: Some("aktet, atselse".to_string()),
            additional_info: None,
            definition: "Regne seg selv som".to_string(),
            definition2: None,
            definition3: Some("Ta hensyn til".to_string()),
            definition4: None,
            definition5: None,
        }
    }

    #[test]
    fn definitions_skip_missing_slots() {
        let e = entry();
        let defs: Vec<&str> = e.definitions().collect();
        assert_eq!(defs, vec!["Regne seg selv som", "Ta hensyn til"]);
    }

    #[test]
    fn serializes_camel_case_without_empty_optionals() {
        let json = serde_json::to_value(entry()).unwrap();
        assert_eq!(json["wordClass"], "Verb");
        assert!(json.get("additionalInfo").is_none());
        assert_eq!(json["definition3"], "Ta hensyn til");
    }
}
