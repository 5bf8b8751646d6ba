use std::io::Write;
use std::sync::Arc;

use ordbok_config::Config;
use ordbok_sheets::{EntrySource, SheetsClient};

pub mod events;
pub mod logging;
pub mod render;


use self::events::load_dictionary;
use self::render::render_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::new();
    logging::init(&config.logging);

    let client = SheetsClient::new(config.sheets.clone())?.with_values_api(config.use_api);
    let source: Arc<dyn EntrySource> = Arc::new(client);
    tracing::info!(
        "Loading dictionary from sheet '{}'",
        source.metadata().name
    );

    let mut stdout = std::io::stdout().lock();
    run(source, &mut stdout).await
}

/// One display session: fetch in the background, render into `out`
pub async fn run<W: Write>(source: Arc<dyn EntrySource>, out: &mut W) -> anyhow::Result<()> {
    let (event_tx, event_rx) = kanal::bounded_async(16);
    let loader = tokio::spawn(load_dictionary(source, event_tx));

    let loaded = render_loop(event_rx, out).await?;

    loader.await??;
    if !loaded {
        anyhow::bail!("Dictionary could not be loaded");
    }
    Ok(())
}
