use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::answer::AnswerValue;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub kind: QuestionKind,
    pub text: String,
    /// Required and non-empty for multiple-choice questions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: AnswerValue,
    #[serde(default = "default_marks")]
    pub marks: u32,
}

fn default_marks() -> u32 {
    1
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuestionKind {
    MultipleChoice,
    FillBlank,
    TrueFalse,
}

impl Question {
    pub fn new(kind: QuestionKind, text: &str, correct_answer: AnswerValue, marks: u32) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            kind,
            text: text.to_string(),
            options: None,
            correct_answer,
            marks,
        }
    }

    /// Field-level constraint check, reported as one message per
    /// violation so the caller can collect them across a question list.
    pub fn validation_errors(&self, index: usize) -> Vec<String> {
        let mut errors = Vec::new();

        if self.text.trim().is_empty() {
            errors.push(format!("questions[{}]: text is required", index));
        }
        if self.marks < 1 {
            errors.push(format!("questions[{}]: marks must be at least 1", index));
        }
        match self.kind {
            QuestionKind::MultipleChoice => {
                let has_options = self
                    .options
                    .as_ref()
                    .map(|o| !o.is_empty())
                    .unwrap_or(false);
                if !has_options {
                    errors.push(format!(
                        "questions[{}]: options are required for multiple-choice questions",
                        index
                    ));
                }
            }
            QuestionKind::FillBlank | QuestionKind::TrueFalse => {}
        }

        errors
    }
}
