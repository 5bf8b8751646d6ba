use ordbok_config::sheets::SheetsConfig;
use ordbok_core::{SheetLayout, demo_entries, parse_csv, parse_gviz, parse_values};
use ordbok_types::DictionaryEntry;

use crate::error::SheetsError;
use crate::source::{EntrySource, SourceMetadata};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Google Sheets reader for the dictionary sheet
pub struct SheetsClient<T = ReqwestTransport> {
    config: SheetsConfig,
    layout: SheetLayout,
    transport: T,
    use_values_api: bool,
}

impl SheetsClient<ReqwestTransport> {
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsError> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> SheetsClient<T> {
    pub fn with_transport(config: SheetsConfig, transport: T) -> Self {
        Self {
            config,
            layout: SheetLayout::EXPORT,
            transport,
            use_values_api: false,
        }
    }

    /// Override the column layout used for the export endpoints
    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Make `fetch_entries` read through the values API
    pub fn with_values_api(mut self, enabled: bool) -> Self {
        self.use_values_api = enabled;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Fetch all entries, CSV export first with the JSON export as fallback.
    ///
    /// An unconfigured client waits `demo_delay` and returns the demo
    /// dataset without touching the network.
    pub async fn fetch_data(&self) -> Result<Vec<DictionaryEntry>, SheetsError> {
        if !self.is_configured() {
            tracing::info!("Sheet not configured, serving demo data");
            tokio::time::sleep(self.config.demo_delay()).await;
            return Ok(demo_entries());
        }

        let csv_error = match self.fetch_csv().await {
            Ok(entries) => return Ok(entries),
            Err(e) => {
                tracing::warn!("Error fetching CSV from Google Sheets: {}", e);
                e
            }
        };

        match self.fetch_json().await {
            Ok(entries) => Ok(entries),
            Err(json_error) => {
                tracing::error!("JSON fallback also failed: {}", json_error);
                Err(SheetsError::Unavailable {
                    csv: Box::new(csv_error),
                    json: Box::new(json_error),
                })
            }
        }
    }

    /// Read the CSV export
    pub async fn fetch_csv(&self) -> Result<Vec<DictionaryEntry>, SheetsError> {
        let url = self.config.csv_url();
        tracing::debug!("GET {}", url);

        let text = self.transport.get_text(&url).await?;
        Ok(parse_csv(&text, &self.layout))
    }

    /// Read the wrapped JSON export
    pub async fn fetch_json(&self) -> Result<Vec<DictionaryEntry>, SheetsError> {
        let url = self.config.json_url();
        tracing::debug!("GET {}", url);

        let text = self.transport.get_text(&url).await?;
        Ok(parse_gviz(&text, &self.layout)?)
    }

    /// Read columns C:K through the authenticated values API
    pub async fn fetch_with_api(&self) -> Result<Vec<DictionaryEntry>, SheetsError> {
        if self.config.api_key.is_empty() {
            return Err(SheetsError::Configuration(
                "Google Sheets API key not configured".to_string(),
            ));
        }

        // url carries the key, keep it out of the logs
        tracing::debug!("GET values API for sheet {}", self.config.sheet_name);
        let text = self.transport.get_text(&self.config.values_url()).await?;
        Ok(parse_values(&text, &SheetLayout::VALUES_RANGE)?)
    }
}

#[async_trait::async_trait]
impl<T: HttpTransport> EntrySource for SheetsClient<T> {
    async fn fetch_entries(&self) -> Result<Vec<DictionaryEntry>, SheetsError> {
        if self.use_values_api {
            self.fetch_with_api().await
        } else {
            self.fetch_data().await
        }
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: self.config.sheet_name.clone(),
            is_demo: !self.is_configured() && !self.use_values_api,
        }
    }
}
