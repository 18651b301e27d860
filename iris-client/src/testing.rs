//! Scripted prediction API for tests

use async_trait::async_trait;
use iris_core::domain::prediction::Prediction;
use iris_core::dto::prediction::CreatePrediction;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::api::PredictionApi;
use crate::error::{ClientError, Result};

pub fn prediction(body: Value) -> Prediction {
    serde_json::from_value(body).expect("valid prediction fixture")
}

/// Replays canned submission and status responses in order
pub struct ScriptedApi {
    submissions: Mutex<VecDeque<Prediction>>,
    polls: Mutex<VecDeque<Prediction>>,
    poll_error: Option<u16>,
    requests: Mutex<Vec<CreatePrediction>>,
    polled_urls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn new(submissions: Vec<Prediction>, polls: Vec<Prediction>) -> Self {
        Self {
            submissions: Mutex::new(submissions.into()),
            polls: Mutex::new(polls.into()),
            poll_error: None,
            requests: Mutex::new(Vec::new()),
            polled_urls: Mutex::new(Vec::new()),
        }
    }

    /// Once the scripted polls run out, answer with this HTTP status
    pub fn failing_polls_with(mut self, status: u16) -> Self {
        self.poll_error = Some(status);
        self
    }

    pub fn requests(&self) -> Vec<CreatePrediction> {
        self.requests.lock().unwrap().clone()
    }

    pub fn polled_urls(&self) -> Vec<String> {
        self.polled_urls.lock().unwrap().clone()
    }

    pub fn poll_count(&self) -> usize {
        self.polled_urls.lock().unwrap().len()
    }
}

#[async_trait]
impl PredictionApi for ScriptedApi {
    async fn create_prediction(&self, request: &CreatePrediction) -> Result<Prediction> {
        self.requests.lock().unwrap().push(request.clone());
        self.submissions
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::ParseError("no submission left".into()))
    }

    async fn get_prediction(&self, status_url: &str) -> Result<Prediction> {
        self.polled_urls.lock().unwrap().push(status_url.to_string());
        match self.polls.lock().unwrap().pop_front() {
            Some(prediction) => Ok(prediction),
            None => match self.poll_error {
                Some(status) => Err(ClientError::api_error(status, "scripted failure")),
                None => Err(ClientError::ParseError("no poll response left".into())),
            },
        }
    }
}
