//! Prediction API seam
//!
//! The poller only needs to submit a prediction and read its status back.
//! [`ReplicateClient`](crate::ReplicateClient) implements this over HTTP;
//! tests substitute a scripted implementation.

use async_trait::async_trait;
use iris_core::domain::prediction::Prediction;
use iris_core::dto::prediction::CreatePrediction;
use std::sync::Arc;

use crate::error::Result;

/// Operations the poller needs from the inference API
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Submits a prediction and returns the API's first view of it
    async fn create_prediction(&self, request: &CreatePrediction) -> Result<Prediction>;

    /// Reads the current state of a prediction from its status URL
    async fn get_prediction(&self, status_url: &str) -> Result<Prediction>;
}

#[async_trait]
impl<T: PredictionApi + ?Sized> PredictionApi for Arc<T> {
    async fn create_prediction(&self, request: &CreatePrediction) -> Result<Prediction> {
        (**self).create_prediction(request).await
    }

    async fn get_prediction(&self, status_url: &str) -> Result<Prediction> {
        (**self).get_prediction(status_url).await
    }
}
