use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::app_config::HttpConfig;
use crate::errors::FetchError;

/// HTTP client for downloading wiki pages
pub struct PageFetcher {
    /// Underlying reqwest client
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher with the configured timeout and user agent
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// GET a page and return its body. One attempt, no retries.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status_code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::BodyDecode(e.to_string()))?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
