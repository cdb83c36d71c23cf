use std::time::Duration;

use reqwest::Client;

use crate::error::SearchError;

/// HTTP fetcher for the recipe dataset.
pub struct DatasetFetcher {
    client: Client,
}

impl DatasetFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("kitchen-canvas/0.3")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch the raw CSV body. Non-success statuses are errors; a 404 page
    /// must not end up being parsed as a dataset. The body stays raw bytes
    /// so encoding problems surface from the parser, not as a lossy decode.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, SearchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
