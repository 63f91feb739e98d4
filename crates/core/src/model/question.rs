use serde::{Deserialize, Serialize};

/// A single-select self-reflection prompt.
///
/// Options and feedback are joined by label, never by position: a feedback
/// list may be reordered or partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    pub feedback: Vec<FeedbackItem>,
}

impl Question {
    #[must_use]
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.label == label)
    }

    /// Feedback authored for `label`, or `None` when no item carries it.
    #[must_use]
    pub fn feedback_for(&self, label: &str) -> Option<&str> {
        self.feedback
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub text: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub label: String,
    pub text: String,
}

impl FeedbackItem {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}
