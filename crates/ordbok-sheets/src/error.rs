use ordbok_core::ParseError;

use crate::transport::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Both export endpoints failed
    #[error(
        "Failed to fetch data from Google Sheets. Please check your sheet ID and permissions."
    )]
    Unavailable {
        csv: Box<SheetsError>,
        json: Box<SheetsError>,
    },
}
