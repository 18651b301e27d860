//! Configuration module
//!
//! Turns CLI flags into a configured client.

use anyhow::{Context, Result, bail};
use iris_client::{ClientConfig, PollOptions, ReplicateClient, VisionModel};
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub token: Option<String>,
    pub model_version: Option<String>,
    pub api_url: String,
    pub upload_url: String,
    /// Seconds between status queries
    pub poll_interval: u64,
    pub max_attempts: Option<u32>,
    /// Polling timeout in seconds
    pub timeout: Option<u64>,
    /// Emit JSON and convert failures into error values
    pub json: bool,
}

impl Config {
    fn client_config(&self) -> ClientConfig {
        let poll = PollOptions {
            interval: Duration::from_secs(self.poll_interval),
            max_attempts: self.max_attempts,
            timeout: self.timeout.map(Duration::from_secs),
        };

        ClientConfig::new(self.token.clone().unwrap_or_default())
            .with_api_base_url(&self.api_url)
            .with_upload_url(&self.upload_url)
            .with_poll(poll)
    }

    /// Client for uploads only; no API token needed
    pub fn upload_client(&self) -> ReplicateClient {
        ReplicateClient::new(self.client_config())
    }

    /// Client for the inference API
    pub fn client(&self) -> Result<ReplicateClient> {
        if self.token.is_none() {
            bail!("No API token given (use --token or REPLICATE_API_TOKEN)");
        }

        let config = self.client_config();
        config.validate().context("Invalid client configuration")?;
        Ok(ReplicateClient::new(config))
    }

    /// Vision model bound to the configured version
    pub fn vision(&self) -> Result<VisionModel<ReplicateClient>> {
        let version = self
            .model_version
            .as_deref()
            .context("No model version given (use --model-version or IRIS_MODEL_VERSION)")?;

        Ok(self.client()?.vision(version))
    }
}
