use ordbok_types::DictionaryEntry;

fn entry(word: &str, word_class: &str, definition: &str) -> DictionaryEntry {
    DictionaryEntry {
        word: word.to_string(),
        word_class: word_class.to_string(),
        inflections: None,
        additional_info: None,
        definition: definition.to_string(),
        definition2: None,
        definition3: None,
        definition4: None,
        definition5: None,
    }
}

/// Fixed entries shown when no sheet is configured
pub fn demo_entries() -> Vec<DictionaryEntry> {
    vec![
        entry(
            "Agn",
            "Substantiv",
            "Spiss som signer for vidden. Agner er lettere enn kjernen på kornet, og blåser bort med vinden, mens kornet faller ned.",
        ),
        entry(
            "Akk",
            "Interjeksjon",
            "Uttrykk for sorg, fortvilelse eller hjelpesløshet",
        ),
        DictionaryEntry {
            inflections: Some("aktet, atselse".to_string()),
            definition2: Some("Ta hensyn til. Bli fullt voksen".to_string()),
            ..entry("Akte", "Verb", "Regne seg selv som. Være oppmerksom på")
        },
        DictionaryEntry {
            definition2: Some("Helhjertet godjømmelse".to_string()),
            ..entry(
                "Almisse",
                "Substantiv",
                "Gave til vanskeligstilte. Bekymrefrielse så at det skal gå bra",
            )
        },
    ]
}
