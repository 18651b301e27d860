//! Prediction poller
//!
//! Submits a prediction, then queries its status URL once per poll interval
//! until the job is `succeeded`, `failed` or `canceled`.

use iris_core::domain::prediction::{Prediction, PredictionOutcome};
use iris_core::dto::prediction::CreatePrediction;
use serde_json::{Value, json};
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::{debug, error, info, warn};

use crate::api::PredictionApi;
use crate::config::PollOptions;
use crate::error::{ClientError, Result};

/// Submits `request` and waits for the prediction to finish
///
/// Transport failures on the submission or on any status query are returned
/// as errors. A job that ends `failed` or `canceled` is a successful call
/// returning [`PredictionOutcome::Failed`].
pub async fn run_prediction<A>(
    api: &A,
    request: &CreatePrediction,
    options: &PollOptions,
) -> Result<PredictionOutcome>
where
    A: PredictionApi + ?Sized,
{
    let prediction = api.create_prediction(request).await?;
    info!(
        "Submitted prediction {} (status: {})",
        prediction.id.as_deref().unwrap_or("<unknown>"),
        prediction.status
    );

    wait_for_prediction(api, prediction, options).await
}

/// Polls an already-submitted prediction until it is terminal
///
/// The status URL is taken once from `prediction` and queried read-only.
pub async fn wait_for_prediction<A>(
    api: &A,
    mut prediction: Prediction,
    options: &PollOptions,
) -> Result<PredictionOutcome>
where
    A: PredictionApi + ?Sized,
{
    let started = Instant::now();
    let mut attempts: u32 = 0;

    if let Some(outcome) = prediction.outcome() {
        info!("Prediction finished with status {}", prediction.status);
        return Ok(outcome);
    }

    let status_url = prediction
        .status_url()
        .ok_or(ClientError::MissingStatusUrl)?
        .to_string();

    loop {
        let attempts_exhausted = options.max_attempts.is_some_and(|max| attempts >= max);
        let deadline_passed = options
            .timeout
            .is_some_and(|timeout| sleep_overruns(started.elapsed(), options.interval, timeout));

        if attempts_exhausted || deadline_passed {
            warn!(
                "Giving up on prediction after {} poll(s) in {:?}",
                attempts,
                started.elapsed()
            );
            return Err(ClientError::PollLimitExceeded {
                attempts,
                elapsed: started.elapsed(),
            });
        }

        time::sleep(options.interval).await;

        attempts += 1;
        prediction = api.get_prediction(&status_url).await?;
        debug!("Poll {}: prediction status {}", attempts, prediction.status);

        if let Some(outcome) = prediction.outcome() {
            info!(
                "Prediction finished with status {} after {} poll(s)",
                prediction.status, attempts
            );
            return Ok(outcome);
        }
    }
}

/// Whether sleeping `interval` from `elapsed` would end past `timeout`
fn sleep_overruns(elapsed: Duration, interval: Duration, timeout: Duration) -> bool {
    elapsed
        .checked_add(interval)
        .is_none_or(|end| end > timeout)
}

/// Converts a poller result into a plain JSON value
///
/// Outcomes are rendered with [`PredictionOutcome::into_value`], errors with
/// [`error_value`].
pub fn outcome_or_error_value(result: Result<PredictionOutcome>) -> Value {
    match result {
        Ok(outcome) => outcome.into_value(),
        Err(e) => error_value(&e),
    }
}

/// Logs `e` and renders it as `{"error": "<message>"}`
pub fn error_value(e: &ClientError) -> Value {
    error!("Prediction request failed: {}", e);
    json!({ "error": e.to_string() })
}
