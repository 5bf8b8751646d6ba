use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sheet id value that marks the client as unconfigured
pub const PLACEHOLDER_SHEET_ID: &str = "YOUR_GOOGLE_SHEET_ID";

fn default_sheet_id() -> String {
    "1BlGCwl__B38EJasz-95jmpRjuMdeVz6Cf_zAzOW_DQg".to_string()
}

fn default_sheet_name() -> String {
    "Ordforklaringer".to_string()
}

fn default_base_url() -> String {
    "https://docs.google.com/spreadsheets/d".to_string()
}

fn default_api_url() -> String {
    "https://sheets.googleapis.com/v4/spreadsheets".to_string()
}

fn default_demo_delay_ms() -> u64 {
    1000
}

fn default_request_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    #[serde(default = "default_sheet_id")]
    pub sheet_id: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    /// Only needed for the values API
    #[serde(default)]
    pub api_key: String,
    /// Export endpoint base, `{base_url}/{sheet_id}/gviz/tq`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Simulated loading time for the demo dataset
    #[serde(default = "default_demo_delay_ms")]
    pub demo_delay_ms: u64,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            sheet_id: default_sheet_id(),
            sheet_name: default_sheet_name(),
            api_key: String::new(),
            base_url: default_base_url(),
            api_url: default_api_url(),
            demo_delay_ms: default_demo_delay_ms(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl SheetsConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let sheet_id = env::var("ORDBOK_SHEET_ID").unwrap_or(defaults.sheet_id);
        let sheet_name = env::var("ORDBOK_SHEET_NAME").unwrap_or(defaults.sheet_name);
        let api_key = env::var("ORDBOK_SHEETS_API_KEY").unwrap_or_default();
        let base_url = env::var("ORDBOK_BASE_URL").unwrap_or(defaults.base_url);

        let demo_delay_ms = env::var("ORDBOK_DEMO_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.demo_delay_ms);

        let request_timeout_seconds = env::var("ORDBOK_REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_seconds);

        Self {
            sheet_id,
            sheet_name,
            api_key,
            base_url,
            api_url: defaults.api_url,
            demo_delay_ms,
            request_timeout_seconds,
        }
    }

    /// Config pointing at no sheet, which makes the client serve demo data
    pub fn unconfigured() -> Self {
        Self {
            sheet_id: PLACEHOLDER_SHEET_ID.to_string(),
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.sheet_id.trim().is_empty() && self.sheet_id != PLACEHOLDER_SHEET_ID
    }

    pub fn demo_delay(&self) -> Duration {
        Duration::from_millis(self.demo_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn csv_url(&self) -> String {
        self.export_url("csv")
    }

    pub fn json_url(&self) -> String {
        self.export_url("json")
    }

    fn export_url(&self, format: &str) -> String {
        format!(
            "{}/{}/gviz/tq?tqx=out:{}&sheet={}",
            self.base_url.trim_end_matches('/'),
            self.sheet_id,
            format,
            urlencoding::encode(&self.sheet_name)
        )
    }

    /// Values API url for the word columns C through K
    pub fn values_url(&self) -> String {
        format!(
            "{}/{}/values/{}!C:K?key={}",
            self.api_url.trim_end_matches('/'),
            self.sheet_id,
            urlencoding::encode(&self.sheet_name),
            urlencoding::encode(&self.api_key)
        )
    }
}
