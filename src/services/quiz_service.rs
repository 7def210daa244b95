use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    auth::{require_can_mutate, Claims},
    errors::{AppError, AppResult},
    models::domain::quiz::Quiz,
    models::domain::quiz_attempt::QuizAttempt,
    models::dto::quiz_dto::{AttemptView, QuizView},
    models::dto::request::{
        CreateQuizRequest, QuizListParams, SubmitAttemptRequest, UpdateQuizRequest,
    },
    repositories::{QuizAttemptRepository, QuizRepository, UserRepository},
    services::{query::QuizQuery, scoring},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn QuizAttemptRepository>,
    users: Arc<dyn UserRepository>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        attempts: Arc<dyn QuizAttemptRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            quizzes,
            attempts,
            users,
        }
    }

    /// Public listing: only `is_public` quizzes, filtered and ordered
    /// by the query service, projected with the denormalized owner.
    pub async fn list_quizzes(&self, params: &QuizListParams) -> AppResult<Vec<QuizView>> {
        let query = QuizQuery::from_params(params)?;

        let quizzes = query.apply(self.quizzes.list_public().await?);
        log::debug!("Quiz listing matched {} quizzes", quizzes.len());

        let owner_names = self.owner_names(&quizzes).await?;

        Ok(quizzes
            .into_iter()
            .map(|quiz| {
                let name = owner_names.get(&quiz.owner_id).cloned();
                QuizView::from_quiz(quiz, name)
            })
            .collect())
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<QuizView> {
        let quiz = self.find_quiz(id).await?;

        let owner_name = self
            .users
            .find_by_id(&quiz.owner_id)
            .await?
            .map(|user| user.name);

        Ok(QuizView::from_quiz(quiz, owner_name))
    }

    pub async fn list_subjects(&self) -> AppResult<Vec<String>> {
        self.quizzes.distinct_subjects().await
    }

    pub async fn create_quiz(
        &self,
        request: CreateQuizRequest,
        claims: &Claims,
    ) -> AppResult<QuizView> {
        let owner = self
            .users
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let quiz = Quiz::new(
            &request.title,
            &request.subject,
            request.duration_minutes,
            &owner.id,
            request.questions.into_iter().map(Into::into).collect(),
            request.is_public,
        );

        let errors = quiz.validation_errors();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let quiz = self.quizzes.insert(quiz).await?;
        log::info!("Quiz '{}' created by user {}", quiz.id, owner.id);

        Ok(QuizView::from_quiz(quiz, Some(owner.name)))
    }

    /// Partial merge of the provided fields into the stored document,
    /// re-validating the merged result before writing it back.
    pub async fn update_quiz(
        &self,
        id: &str,
        request: UpdateQuizRequest,
        claims: &Claims,
    ) -> AppResult<QuizView> {
        let mut quiz = self.find_quiz(id).await?;
        require_can_mutate(&quiz, claims)?;

        if let Some(title) = request.title {
            quiz.title = title;
        }
        if let Some(subject) = request.subject {
            quiz.subject = subject;
        }
        if let Some(duration_minutes) = request.duration_minutes {
            quiz.duration_minutes = duration_minutes;
        }
        if let Some(questions) = request.questions {
            quiz.questions = questions.into_iter().map(Into::into).collect();
        }
        if let Some(is_public) = request.is_public {
            quiz.is_public = is_public;
        }

        let errors = quiz.validation_errors();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let quiz = self.quizzes.replace(quiz).await?;

        let owner_name = self
            .users
            .find_by_id(&quiz.owner_id)
            .await?
            .map(|user| user.name);

        Ok(QuizView::from_quiz(quiz, owner_name))
    }

    /// Deletes the quiz and every attempt recorded against it.
    /// Attempts go first; there is no cross-document transaction, so
    /// a crash in between leaves a quiz with zero attempts rather
    /// than orphaned attempts.
    pub async fn delete_quiz(&self, id: &str, claims: &Claims) -> AppResult<()> {
        let quiz = self.find_quiz(id).await?;
        require_can_mutate(&quiz, claims)?;

        let removed = self.attempts.delete_by_quiz(&quiz.id).await?;
        self.quizzes.delete(&quiz.id).await?;

        log::info!(
            "Quiz '{}' deleted by user {} along with {} attempts",
            quiz.id,
            claims.sub,
            removed
        );
        Ok(())
    }

    /// Scores a submission against the quiz's answer key and persists
    /// the attempt with `total_marks` snapshotted from the quiz as it
    /// exists right now.
    pub async fn submit_attempt(
        &self,
        quiz_id: &str,
        request: SubmitAttemptRequest,
        claims: &Claims,
    ) -> AppResult<AttemptView> {
        let quiz = self.find_quiz(quiz_id).await?;

        let (score, responses) = scoring::score_submission(&quiz, &request.responses)?;

        let attempt = QuizAttempt::new(
            &claims.sub,
            &quiz.id,
            score,
            quiz.total_marks(),
            responses,
            request.time_taken_seconds,
        );

        let attempt = self.attempts.create(attempt).await?;
        Ok(attempt.into())
    }

    async fn find_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }

    async fn owner_names(&self, quizzes: &[Quiz]) -> AppResult<HashMap<String, String>> {
        let mut names = HashMap::new();
        for quiz in quizzes {
            if names.contains_key(&quiz.owner_id) {
                continue;
            }
            if let Some(user) = self.users.find_by_id(&quiz.owner_id).await? {
                names.insert(quiz.owner_id.clone(), user.name);
            }
        }
        Ok(names)
    }
}
