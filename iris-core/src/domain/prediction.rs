//! Prediction domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error descriptor used when a failed prediction carries no `error` field
pub const GENERIC_FAILURE: &str = "Prediction failed";

/// Remote prediction status
///
/// Only `Succeeded`, `Failed` and `Canceled` are terminal. Every other label,
/// including ones this client has never seen, means the job is still in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    Other(String),
}

impl PredictionStatus {
    /// Whether polling should stop at this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }

    /// Wire label of the status
    pub fn as_str(&self) -> &str {
        match self {
            Self::Starting => "starting",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for PredictionStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "starting" => Self::Starting,
            "processing" => Self::Processing,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "canceled" => Self::Canceled,
            _ => Self::Other(label),
        }
    }
}

impl From<PredictionStatus> for String {
    fn from(status: PredictionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for PredictionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URLs the API attaches to a prediction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionUrls {
    /// Status-query URL, polled until the prediction is terminal
    pub get: Option<String>,
    pub cancel: Option<String>,
}

/// Prediction record as returned by the submission and status endpoints
///
/// Only `status` is required; everything else depends on how far the job got.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    pub status: PredictionStatus,
    #[serde(default)]
    pub input: Option<Value>,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub logs: Option<String>,
    #[serde(default)]
    pub urls: PredictionUrls,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Prediction {
    /// Status-query URL of this prediction, if the API sent one
    pub fn status_url(&self) -> Option<&str> {
        self.urls.get.as_deref()
    }

    /// Converts a terminal prediction into its outcome
    ///
    /// Returns `None` while the prediction is still in flight.
    pub fn outcome(&self) -> Option<PredictionOutcome> {
        match self.status {
            PredictionStatus::Succeeded => Some(PredictionOutcome::Succeeded {
                output: self.output.clone().unwrap_or(Value::Null),
            }),
            PredictionStatus::Failed | PredictionStatus::Canceled => {
                let error = match &self.error {
                    Some(error) if !error.is_null() => error.clone(),
                    _ => Value::String(GENERIC_FAILURE.to_string()),
                };
                Some(PredictionOutcome::Failed {
                    status: self.status.clone(),
                    error,
                })
            }
            _ => None,
        }
    }
}

/// Final result of a prediction
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    /// The job succeeded; `output` is whatever the model returned
    Succeeded { output: Value },
    /// The job failed or was canceled
    Failed {
        status: PredictionStatus,
        error: Value,
    },
}

impl PredictionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Output of a successful prediction
    pub fn output(&self) -> Option<&Value> {
        match self {
            Self::Succeeded { output } => Some(output),
            Self::Failed { .. } => None,
        }
    }

    /// Output rendered as text
    ///
    /// Captioning models answer with a string, sometimes wrapped in a list of
    /// chunks; both are joined into one string. Other shapes are serialized.
    pub fn output_text(&self) -> Option<String> {
        self.output().map(value_to_text)
    }

    /// Renders the outcome in the API's shape: the output itself, or
    /// `{"error": <descriptor>}`
    pub fn into_value(self) -> Value {
        match self {
            Self::Succeeded { output } => output,
            Self::Failed { error, .. } => serde_json::json!({ "error": error }),
        }
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(chunks) if chunks.iter().all(Value::is_string) => chunks
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .concat(),
        other => other.to_string(),
    }
}
