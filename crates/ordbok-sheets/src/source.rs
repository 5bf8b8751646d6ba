use ordbok_types::DictionaryEntry;

use crate::error::SheetsError;

/// Anything that can produce the full entry list for a display session
#[async_trait::async_trait]
pub trait EntrySource: Send + Sync {
    /// Fetch every entry, rebuilt from scratch on each call
    async fn fetch_entries(&self) -> Result<Vec<DictionaryEntry>, SheetsError>;

    /// Source metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub is_demo: bool,
}
