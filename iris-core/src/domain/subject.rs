//! Image subject classification

use serde::{Deserialize, Serialize};

/// Question asked to decide what an image mostly shows
pub const CLASSIFY_QUESTION: &str = "In this picture, is the main subject a text, an object, or a scenery? You may only answer with the following words in lowercase (text, object, scenery)";

/// Question asked when the subject is text
pub const READ_TEXT_QUESTION: &str = "What does the text in this image say?";

/// Answer given when the subject could not be classified
pub const UNKNOWN_SUBJECT_ANSWER: &str = "I'm not sure what this image shows.";

/// Main subject of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Text,
    Object,
    Scenery,
    Unknown,
}

impl SubjectKind {
    /// Maps a free-form model answer onto a subject kind
    ///
    /// Matching is case-insensitive containment, tried in the order
    /// text, object, scenery.
    pub fn from_answer(answer: &str) -> Self {
        let answer = answer.to_lowercase();
        if answer.contains("text") {
            Self::Text
        } else if answer.contains("object") {
            Self::Object
        } else if answer.contains("scenery") {
            Self::Scenery
        } else {
            Self::Unknown
        }
    }
}

impl std::fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Object => "object",
            Self::Scenery => "scenery",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_answer() {
        assert_eq!(SubjectKind::from_answer("object"), SubjectKind::Object);
        assert_eq!(SubjectKind::from_answer("Scenery."), SubjectKind::Scenery);
        assert_eq!(SubjectKind::from_answer("answer: TEXT"), SubjectKind::Text);
        assert_eq!(SubjectKind::from_answer("a dog"), SubjectKind::Unknown);
    }

    #[test]
    fn test_text_wins_over_later_matches() {
        assert_eq!(
            SubjectKind::from_answer("text on an object"),
            SubjectKind::Text
        );
    }
}
