use reqwest::Client;
use std::time::Duration;

use super::schema::MinerStatus;

/// NBMiner status API client
/// Handles all communication with the miner's local HTTP endpoint
pub struct MinerClient {
    client: Client,
    base_url: String,
}

/// The two failure kinds a poll cycle can hit: the request never completed,
/// or the body did not decode into the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum MinerError {
    #[error("polling error: {0}")]
    Polling(String),

    #[error("parsing error: {0}")]
    Parsing(String),
}

impl MinerClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            base_url,
        }
    }

    /// Fetch the current status from {base_url}/api/v1/status
    ///
    /// Non-2xx responses are not treated specially; a body that is not the
    /// expected JSON simply fails the decode step.
    pub async fn status(&self) -> Result<MinerStatus, MinerError> {
        let url = format!("{}/api/v1/status", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MinerError::Polling(e.to_string()))?;

        let status: MinerStatus = response
            .json()
            .await
            .map_err(|e| MinerError::Parsing(e.to_string()))?;

        Ok(status)
    }
}
