//! Prediction DTOs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request to start a prediction
///
/// Serialized as `{"version": ..., "input": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePrediction {
    /// Model version the job runs on
    pub version: String,
    pub input: BTreeMap<String, String>,
}

impl CreatePrediction {
    pub fn new(version: impl Into<String>, input: BTreeMap<String, String>) -> Self {
        Self {
            version: version.into(),
            input,
        }
    }
}
