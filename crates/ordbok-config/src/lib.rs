use std::env;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::sheets::SheetsConfig;

pub mod logging;
pub mod sheets;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub sheets: SheetsConfig,
    pub logging: LoggingConfig,

    /// Read from the Sheets values API instead of the public export endpoints
    pub use_api: bool,
}

impl Config {
    pub fn new() -> Self {
        let use_api = env::var("ORDBOK_USE_API")
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Config {
            sheets: SheetsConfig::new(),
            logging: LoggingConfig::new(),
            use_api,
        }
    }
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
