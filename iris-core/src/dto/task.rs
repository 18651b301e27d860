//! Vision task inputs
//!
//! Builds the input mapping the captioning / VQA model expects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task understood by the hosted vision model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisionTask {
    /// Visual question answering; carries the question
    VisualQuestionAnswering { question: String },
    Caption,
}

impl VisionTask {
    /// Wire name of the task
    pub fn name(&self) -> &'static str {
        match self {
            Self::VisualQuestionAnswering { .. } => "visual_question_answering",
            Self::Caption => "caption",
        }
    }

    /// Builds the input mapping for `image`
    pub fn input(&self, image: &str) -> BTreeMap<String, String> {
        let mut input = BTreeMap::new();
        input.insert("image".to_string(), image.to_string());
        input.insert("task".to_string(), self.name().to_string());
        if let Self::VisualQuestionAnswering { question } = self {
            input.insert("question".to_string(), question.clone());
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_input() {
        let input = VisionTask::Caption.input("a.jpg");
        assert_eq!(input.len(), 2);
        assert_eq!(input["image"], "a.jpg");
        assert_eq!(input["task"], "caption");
    }

    #[test]
    fn test_vqa_input_adds_question() {
        let task = VisionTask::VisualQuestionAnswering {
            question: "What color is the cat?".to_string(),
        };
        let input = task.input("https://host/x.jpg");
        assert_eq!(input["task"], "visual_question_answering");
        assert_eq!(input["question"], "What color is the cat?");
        assert_eq!(input["image"], "https://host/x.jpg");
    }
}
