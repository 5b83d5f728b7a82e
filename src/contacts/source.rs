//! Remote contact source

use async_trait::async_trait;
use thiserror::Error;

use super::models::RemoteContact;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the contact list comes from. The production implementation is an
/// HTTP fetch; tests substitute in-memory fakes.
#[async_trait]
pub trait ContactSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RemoteContact>, SourceError>;
}

/// Fetches the contact list from a JSON resource over HTTP
pub struct HttpContactSource {
    client: reqwest::Client,
    url: String,
}

impl HttpContactSource {
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ContactSource for HttpContactSource {
    async fn fetch(&self) -> Result<Vec<RemoteContact>, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let contacts = response.error_for_status()?.json().await?;
        Ok(contacts)
    }
}
