use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// Non-2xx response. The query string is dropped since it may carry the API key.
    pub fn status(url: &str, status: u16) -> Self {
        FetchError::Status {
            url: strip_query(url).to_string(),
            status,
        }
    }
}

fn strip_query(url: &str) -> &str {
    url.split_once('?').map(|(base, _)| base).unwrap_or(url)
}

/// Plain GET returning the response body as text
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        // reqwest errors embed the full url, key included
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))
    }
}
