use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::question::Question;
use crate::models::domain::quiz::Quiz;
use crate::models::domain::quiz_attempt::{QuizAttempt, ScoredResponse};
use crate::models::domain::user::{User, UserRole};

/// Denormalized owner projection attached to quiz reads.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOwner {
    pub id: String,
    pub name: String,
}

/// Listing/detail projection. The full question list, correct answers
/// included, is exposed here: inherited behavior from the system this
/// was ported from, kept deliberately (see DESIGN.md).
#[derive(Debug, Serialize)]
pub struct QuizView {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub duration_minutes: u32,
    pub created_at: DateTime<Utc>,
    pub questions: Vec<Question>,
    pub question_count: usize,
    pub total_marks: u32,
    pub created_by: QuizOwner,
}

impl QuizView {
    pub fn from_quiz(quiz: Quiz, owner_name: Option<String>) -> Self {
        let question_count = quiz.question_count();
        let total_marks = quiz.total_marks();

        QuizView {
            id: quiz.id,
            title: quiz.title,
            subject: quiz.subject,
            duration_minutes: quiz.duration_minutes,
            created_at: quiz.created_at,
            questions: quiz.questions,
            question_count,
            total_marks,
            created_by: QuizOwner {
                id: quiz.owner_id,
                name: owner_name.unwrap_or_else(|| "Unknown".to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AttemptView {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub score: u32,
    pub total_marks: u32,
    pub percentage: u32,
    pub responses: Vec<ScoredResponse>,
    pub completed_at: DateTime<Utc>,
    pub time_taken_seconds: u32,
}

impl From<QuizAttempt> for AttemptView {
    fn from(attempt: QuizAttempt) -> Self {
        let percentage = attempt.percentage();
        AttemptView {
            id: attempt.id,
            user_id: attempt.user_id,
            quiz_id: attempt.quiz_id,
            score: attempt.score,
            total_marks: attempt.total_marks,
            percentage,
            responses: attempt.responses,
            completed_at: attempt.completed_at,
            time_taken_seconds: attempt.time_taken_seconds,
        }
    }
}

/// User projection for auth responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}
