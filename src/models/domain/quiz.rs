use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::Question;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub duration_minutes: u32,
    pub owner_id: String,
    pub questions: Vec<Question>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    pub fn new(
        title: &str,
        subject: &str,
        duration_minutes: u32,
        owner_id: &str,
        questions: Vec<Question>,
        is_public: bool,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            subject: subject.to_string(),
            duration_minutes,
            owner_id: owner_id.to_string(),
            questions,
            is_public,
            created_at: Utc::now(),
        }
    }

    /// Computed, never stored: later edits to the question list are
    /// reflected here, while persisted attempts keep their own
    /// snapshot of the total.
    pub fn total_marks(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |total, q| total.saturating_add(q.marks))
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Full schema check, run on create and again on the merged
    /// document after a partial update. Collects every violation
    /// instead of stopping at the first.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("title is required".to_string());
        }
        if self.subject.trim().is_empty() {
            errors.push("subject is required".to_string());
        }
        if self.duration_minutes < 1 {
            errors.push("duration must be at least 1 minute".to_string());
        }
        if self.questions.is_empty() {
            errors.push("at least one question is required".to_string());
        }
        for (index, question) in self.questions.iter().enumerate() {
            errors.extend(question.validation_errors(index));
        }
        // The aggregate of all question marks must fit in u32.
        if self
            .questions
            .iter()
            .map(|q| q.marks)
            .try_fold(0u32, u32::checked_add)
            .is_none()
        {
            errors.push(format!(
                "total marks must not exceed {}",
                u32::MAX
            ));
        }

        errors
    }
}
