//! Iris HTTP Client
//!
//! A small client for a hosted image-understanding API (captioning and visual
//! question answering) plus an image uploader for a public file host.
//!
//! A prediction is submitted once, then its status URL is polled until the
//! remote job is `succeeded`, `failed` or `canceled`.
//!
//! # Example
//!
//! ```no_run
//! use iris_client::{ClientConfig, ReplicateClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ReplicateClient::new(ClientConfig::new("r8_token"));
//!
//!     let image = client.upload_image("cat.jpg").await?;
//!     let outcome = client.vision("model-version").describe_object(&image).await?;
//!
//!     println!("{}", outcome.into_value());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod poller;
mod predictions;
mod upload;
pub mod vision;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use api::PredictionApi;
pub use config::{ClientConfig, PollOptions};
pub use error::{ClientError, Result};
pub use iris_core::domain::prediction::{Prediction, PredictionOutcome, PredictionStatus};
pub use vision::VisionModel;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the hosted inference API and the image file host
#[derive(Debug, Clone)]
pub struct ReplicateClient {
    config: ClientConfig,
    /// HTTP client instance
    client: Client,
}

impl ReplicateClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use iris_client::{ClientConfig, ReplicateClient};
    ///
    /// let client = ReplicateClient::new(ClientConfig::new("r8_token"));
    /// assert_eq!(client.config().api_base_url, "https://api.replicate.com/v1");
    /// ```
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(mut config: ClientConfig, client: Client) -> Self {
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Self { config, client }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
