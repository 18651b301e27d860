//! Prediction-related API endpoints

use async_trait::async_trait;
use iris_core::domain::prediction::{Prediction, PredictionOutcome};
use iris_core::dto::prediction::CreatePrediction;
use std::collections::BTreeMap;
use tracing::debug;

use crate::ReplicateClient;
use crate::api::PredictionApi;
use crate::error::Result;
use crate::poller;

#[async_trait]
impl PredictionApi for ReplicateClient {
    async fn create_prediction(&self, request: &CreatePrediction) -> Result<Prediction> {
        let url = format!("{}/predictions", self.config.api_base_url);
        debug!("Submitting prediction for version {}", request.version);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn get_prediction(&self, status_url: &str) -> Result<Prediction> {
        let response = self
            .client
            .get(status_url)
            .bearer_auth(&self.config.api_token)
            .send()
            .await?;

        self.handle_response(response).await
    }
}

impl ReplicateClient {
    // =============================================================================
    // Prediction Lifecycle
    // =============================================================================

    /// Submit a prediction and wait for it to finish
    ///
    /// Polls with the client's configured [`PollOptions`](crate::PollOptions).
    ///
    /// # Arguments
    /// * `version` - Model version to run
    /// * `input` - Named model inputs
    ///
    /// # Example
    /// ```no_run
    /// # use iris_client::{ClientConfig, ReplicateClient};
    /// # use std::collections::BTreeMap;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ReplicateClient::new(ClientConfig::new("r8_token"));
    /// let mut input = BTreeMap::new();
    /// input.insert("image".to_string(), "https://host/cat.jpg".to_string());
    /// input.insert("task".to_string(), "caption".to_string());
    ///
    /// let outcome = client.run("model-version", input).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(
        &self,
        version: &str,
        input: BTreeMap<String, String>,
    ) -> Result<PredictionOutcome> {
        let request = CreatePrediction::new(version, input);
        poller::run_prediction(self, &request, &self.config.poll).await
    }

    /// Cancel a running prediction
    ///
    /// # Arguments
    /// * `cancel_url` - The prediction's `urls.cancel` value
    ///
    /// # Returns
    /// The prediction as the API reports it after cancellation
    pub async fn cancel_prediction(&self, cancel_url: &str) -> Result<Prediction> {
        let response = self
            .client
            .post(cancel_url)
            .bearer_auth(&self.config.api_token)
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use crate::config::PollOptions;
    use crate::error::ClientError;
    use iris_core::domain::prediction::PredictionStatus;
    use mockito::Matcher;
    use serde_json::json;
    use std::time::Duration;

    fn client_for(server: &mockito::Server) -> ReplicateClient {
        let config = ClientConfig::new("r8_test")
            .with_api_base_url(server.url())
            .with_poll(PollOptions::default().with_interval(Duration::from_millis(10)));
        ReplicateClient::new(config)
    }

    fn caption_input() -> BTreeMap<String, String> {
        let mut input = BTreeMap::new();
        input.insert("image".to_string(), "a.jpg".to_string());
        input.insert("task".to_string(), "caption".to_string());
        input
    }

    #[tokio::test]
    async fn test_run_submits_then_polls_until_succeeded() {
        let mut server = mockito::Server::new_async().await;
        let status_url = format!("{}/predictions/p1", server.url());

        let submit = server
            .mock("POST", "/predictions")
            .match_header("authorization", "Bearer r8_test")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "version": "v1",
                "input": { "image": "a.jpg", "task": "caption" }
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": "starting", "urls": { "get": status_url } }).to_string())
            .create_async()
            .await;

        let poll = server
            .mock("GET", "/predictions/p1")
            .match_header("authorization", "Bearer r8_test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": "succeeded", "output": "a cat" }).to_string())
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let outcome = client.run("v1", caption_input()).await.unwrap();

        assert_eq!(outcome.into_value(), json!("a cat"));
        submit.assert_async().await;
        poll.assert_async().await;
    }

    #[tokio::test]
    async fn test_submission_error_status_propagates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/predictions")
            .with_status(401)
            .with_body("{\"detail\":\"Unauthenticated\"}")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.run("v1", caption_input()).await.unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Unauthenticated"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_submission_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/predictions")
            .with_status(201)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.run("v1", caption_input()).await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_cancel_prediction() {
        let mut server = mockito::Server::new_async().await;
        let cancel = server
            .mock("POST", "/predictions/p1/cancel")
            .match_header("authorization", "Bearer r8_test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "id": "p1", "status": "canceled" }).to_string())
            .create_async()
            .await;

        let client = client_for(&server);
        let prediction = client
            .cancel_prediction(&format!("{}/predictions/p1/cancel", server.url()))
            .await
            .unwrap();

        assert_eq!(prediction.status, PredictionStatus::Canceled);
        cancel.assert_async().await;
    }
}
