use std::fmt::Write as _;
use std::io::Write;

use anyhow::Context;
use kanal::AsyncReceiver;
use ordbok_types::{AppEvent, DictionaryEntry};

/// Format one entry as an indented text block
pub fn render_entry(entry: &DictionaryEntry) -> String {
    let mut out = String::new();

    if entry.word_class.is_empty() {
        let _ = writeln!(out, "{}", entry.word);
    } else {
        let _ = writeln!(out, "{} ({})", entry.word, entry.word_class);
    }
    if let Some(inflections) = &entry.inflections {
        let _ = writeln!(out, "  Bøyninger: {inflections}");
    }
    if let Some(info) = &entry.additional_info {
        let _ = writeln!(out, "  {info}");
    }
    for (i, definition) in entry.definitions().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, definition);
    }

    out
}

pub fn render_entries(entries: &[DictionaryEntry]) -> String {
    if entries.is_empty() {
        return "Ingen ord funnet.\n".to_string();
    }

    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draw events until the loader reports a result.
///
/// Returns whether entries were loaded.
pub async fn render_loop<W: Write>(
    app_rx: AsyncReceiver<AppEvent>,
    out: &mut W,
) -> anyhow::Result<bool> {
    loop {
        let event = app_rx
            .recv()
            .await
            .context("Loader stopped before reporting a result")?;

        match event {
            AppEvent::Loading { source } => {
                writeln!(out, "Laster ordbok fra {source}...")?;
                out.flush()?;
            }
            AppEvent::Loaded(entries) => {
                write!(out, "{}", render_entries(&entries))?;
                writeln!(out, "\n{} ord", entries.len())?;
                out.flush()?;
                return Ok(true);
            }
            AppEvent::Failed(message) => {
                writeln!(out, "Feil: {message}")?;
                out.flush()?;
                return Ok(false);
            }
        }
    }
}
