//! Vision model helpers
//!
//! Captioning and visual question answering on top of the prediction poller.
//! Every helper returns the poller's `Result` unchanged; whether a transport
//! error propagates or becomes an error value is up to the caller (see
//! [`outcome_or_error_value`](crate::poller::outcome_or_error_value)).

use iris_core::domain::prediction::PredictionOutcome;
use iris_core::domain::subject::{
    CLASSIFY_QUESTION, READ_TEXT_QUESTION, SubjectKind, UNKNOWN_SUBJECT_ANSWER,
};
use iris_core::dto::prediction::CreatePrediction;
use iris_core::dto::task::VisionTask;
use serde_json::Value;
use tracing::{debug, info};

use crate::ReplicateClient;
use crate::api::PredictionApi;
use crate::config::PollOptions;
use crate::error::Result;
use crate::poller;

/// Result of asking the model what an image mostly shows
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub kind: SubjectKind,
    /// Raw answer of the classification question
    pub answer: PredictionOutcome,
}

/// A captioning / VQA model version bound to an API
pub struct VisionModel<A> {
    api: A,
    version: String,
    poll: PollOptions,
}

impl ReplicateClient {
    /// Bind a model version to this client, polling with the client's options
    pub fn vision(&self, version: impl Into<String>) -> VisionModel<ReplicateClient> {
        let poll = self.config.poll.clone();
        VisionModel::new(self.clone(), version, poll)
    }
}

impl<A: PredictionApi> VisionModel<A> {
    pub fn new(api: A, version: impl Into<String>, poll: PollOptions) -> Self {
        Self {
            api,
            version: version.into(),
            poll,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    async fn run_task(&self, image: &str, task: VisionTask) -> Result<PredictionOutcome> {
        debug!("Running {} on {}", task.name(), image);
        let request = CreatePrediction::new(&self.version, task.input(image));
        poller::run_prediction(&self.api, &request, &self.poll).await
    }

    /// Ask a question about an image
    pub async fn ask(&self, image: &str, question: &str) -> Result<PredictionOutcome> {
        let task = VisionTask::VisualQuestionAnswering {
            question: question.to_string(),
        };
        self.run_task(image, task).await
    }

    /// Caption the main object of an image
    pub async fn describe_object(&self, image: &str) -> Result<PredictionOutcome> {
        self.run_task(image, VisionTask::Caption).await
    }

    /// Caption the scenery of an image
    pub async fn describe_scenery(&self, image: &str) -> Result<PredictionOutcome> {
        self.run_task(image, VisionTask::Caption).await
    }

    /// Ask whether the image mostly shows text, an object or scenery
    ///
    /// A failed prediction classifies as [`SubjectKind::Unknown`].
    pub async fn classify_subject(&self, image: &str) -> Result<Classification> {
        let answer = self.ask(image, CLASSIFY_QUESTION).await?;
        let kind = answer
            .output_text()
            .map(|text| SubjectKind::from_answer(&text))
            .unwrap_or(SubjectKind::Unknown);

        info!("Classified {} as {}", image, kind);
        Ok(Classification { kind, answer })
    }

    /// Classify the image, then describe it accordingly
    ///
    /// If classification fails remotely, its failed outcome is returned as is.
    pub async fn analyze(&self, image: &str) -> Result<PredictionOutcome> {
        let classification = self.classify_subject(image).await?;

        if !classification.answer.is_success() {
            return Ok(classification.answer);
        }

        match classification.kind {
            SubjectKind::Text => self.ask(image, READ_TEXT_QUESTION).await,
            SubjectKind::Object => self.describe_object(image).await,
            SubjectKind::Scenery => self.describe_scenery(image).await,
            SubjectKind::Unknown => Ok(PredictionOutcome::Succeeded {
                output: Value::String(UNKNOWN_SUBJECT_ANSWER.to_string()),
            }),
        }
    }
}
