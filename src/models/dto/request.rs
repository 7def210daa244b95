use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::answer::AnswerValue;
use crate::models::domain::question::{Question, QuestionKind};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuizRequest {
    pub title: String,
    pub subject: String,
    pub duration_minutes: u32,
    pub questions: Vec<QuestionInput>,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
}

fn default_is_public() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionInput {
    pub kind: QuestionKind,
    pub text: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    pub correct_answer: AnswerValue,
    #[serde(default = "default_marks")]
    pub marks: u32,
}

fn default_marks() -> u32 {
    1
}

impl From<QuestionInput> for Question {
    fn from(input: QuestionInput) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            kind: input.kind,
            text: input.text,
            options: input.options,
            correct_answer: input.correct_answer,
            marks: input.marks,
        }
    }
}

/// Partial update: absent fields keep their stored values. The merged
/// document is re-validated as a whole before being written back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuizRequest {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub duration_minutes: Option<u32>,
    pub questions: Option<Vec<QuestionInput>>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizListParams {
    pub subject: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseInput {
    pub question_id: String,
    pub selected_answer: AnswerValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAttemptRequest {
    pub responses: Vec<ResponseInput>,
    #[serde(default)]
    pub time_taken_seconds: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleAuthRequest {
    /// A Google-issued ID token, as produced by Google Identity
    /// Services on the client.
    pub credential: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn create_quiz_request_defaults_to_public() {
        let json = r#"{
            "title": "Basics",
            "subject": "Math",
            "duration_minutes": 10,
            "questions": [
                { "kind": "FillBlank", "text": "2 + 2 = ?", "correct_answer": 4 }
            ]
        }"#;

        let request: CreateQuizRequest = serde_json::from_str(json).unwrap();
        assert!(request.is_public);
        assert_eq!(request.questions[0].marks, 1);
    }

    #[test]
    fn question_input_gets_a_fresh_id() {
        let input = QuestionInput {
            kind: QuestionKind::TrueFalse,
            text: "Water is wet".to_string(),
            options: None,
            correct_answer: AnswerValue::Bool(true),
            marks: 2,
        };

        let question: Question = input.into();
        assert!(!question.id.is_empty());
        assert_eq!(question.marks, 2);
    }

    #[test]
    fn signup_request_rejects_bad_email_and_short_password() {
        let request = SignupRequest {
            name: "John".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn submit_attempt_time_taken_defaults_to_zero() {
        let json = r#"{ "responses": [] }"#;
        let request: SubmitAttemptRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.time_taken_seconds, 0);
    }
}
