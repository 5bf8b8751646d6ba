#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Response is not wrapped in google.visualization.Query.setResponse(...)")]
    MissingWrapper,

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response has no table")]
    MissingTable,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}
