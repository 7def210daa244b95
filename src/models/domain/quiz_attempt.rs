use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::answer::AnswerValue;

/// A scored submission against a quiz. Immutable once persisted:
/// `total_marks` is snapshotted at submission time, so later edits to
/// the quiz never change a historical attempt's denominator.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub score: u32,
    pub total_marks: u32,
    pub responses: Vec<ScoredResponse>,
    pub completed_at: DateTime<Utc>,
    pub time_taken_seconds: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScoredResponse {
    pub question_id: String,
    pub selected_answer: AnswerValue,
    pub is_correct: bool,
}

impl QuizAttempt {
    pub fn new(
        user_id: &str,
        quiz_id: &str,
        score: u32,
        total_marks: u32,
        responses: Vec<ScoredResponse>,
        time_taken_seconds: u32,
    ) -> Self {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            score,
            total_marks,
            responses,
            completed_at: Utc::now(),
            time_taken_seconds,
        }
    }

    pub fn percentage(&self) -> u32 {
        if self.total_marks == 0 {
            return 0;
        }
        ((self.score as f64 / self.total_marks as f64) * 100.0).round() as u32
    }
}
