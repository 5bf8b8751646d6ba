use std::sync::Arc;

use kanal::AsyncSender;
use ordbok_sheets::EntrySource;
use ordbok_types::AppEvent;

/// Run one fetch and report progress to the renderer
pub async fn load_dictionary(
    source: Arc<dyn EntrySource>,
    app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let metadata = source.metadata();
    let label = if metadata.is_demo {
        "demo data".to_string()
    } else {
        metadata.name
    };

    app_tx.send(AppEvent::Loading { source: label }).await?;

    let event = match source.fetch_entries().await {
        Ok(entries) => {
            tracing::info!("Loaded {} dictionary entries", entries.len());
            AppEvent::Loaded(entries)
        }
        Err(e) => {
            tracing::error!("Failed to load dictionary: {}", e);
            AppEvent::Failed(e.to_string())
        }
    };

    app_tx.send(event).await?;
    Ok(())
}
