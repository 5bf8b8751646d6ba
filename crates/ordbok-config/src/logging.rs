use std::env;

use serde::{Deserialize, Serialize};

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        let json = env::var("ORDBOK_LOG_JSON")
            .ok()
            .map(|v| crate::parse_flag(&v))
            .unwrap_or(false);

        Self {
            json,
            ..Self::default()
        }
    }
}
