use crate::config::metadata_config::MetadataConfig;
use crate::domain::model::{Metadata, VideoRequest};
use crate::domain::ports::MetadataSource;
use crate::utils::error::{Result, SvcError};
use async_trait::async_trait;
use reqwest::Client;

/// HTTP client for the external video metadata API.
pub struct VideoMetadataClient {
    client: Client,
    config: MetadataConfig,
}

impl VideoMetadataClient {
    pub fn new(config: MetadataConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    /// Fetch metadata for `request`, retrying transport and HTTP status
    /// failures up to `retry_attempts` times.
    ///
    /// The API key is resolved before any request is made, so a missing key
    /// fails with [`SvcError::MissingApiKey`] without touching the network.
    /// A body that is not valid JSON is not retried.
    pub async fn fetch_metadata(&self, request: &VideoRequest) -> Result<Metadata> {
        let api_key = self.config.resolve_api_key()?;
        let attempts = self.config.retry_attempts.max(1);

        let mut attempt = 1;
        loop {
            tracing::debug!(
                "Requesting metadata for {} (attempt {}/{})",
                request.url(),
                attempt,
                attempts
            );

            match self.send_once(request, &api_key).await {
                Ok(body) => {
                    let metadata: Metadata = serde_json::from_slice(&body)?;
                    tracing::info!("✅ Fetched metadata for {}", request.url());
                    return Ok(metadata);
                }
                Err(e) if attempt < attempts => {
                    tracing::warn!(
                        "⚠️ Metadata request failed (attempt {}/{}): {}",
                        attempt,
                        attempts,
                        e
                    );
                    tokio::time::sleep(self.config.retry_delay()).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!("❌ Metadata request failed after {} attempt(s): {}", attempts, e);
                    return Err(SvcError::ApiRequestFailed {
                        attempts,
                        source: e,
                    });
                }
            }
        }
    }

    async fn send_once(&self, request: &VideoRequest, api_key: &str) -> reqwest::Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("url", request.url().as_str())])
            .bearer_auth(api_key)
            .send()
            .await?;

        tracing::debug!("Metadata API response status: {}", response.status());

        let body = response.error_for_status()?.bytes().await?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl MetadataSource for VideoMetadataClient {
    async fn fetch_metadata(&self, request: &VideoRequest) -> Result<Metadata> {
        VideoMetadataClient::fetch_metadata(self, request).await
    }
}

/// Fetch metadata with the default configuration (key from `VIDEO_API_KEY`).
pub async fn fetch_metadata(request: &VideoRequest) -> Result<Metadata> {
    VideoMetadataClient::new(MetadataConfig::default())?
        .fetch_metadata(request)
        .await
}
