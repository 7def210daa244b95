use crate::{
    errors::{AppError, AppResult},
    models::domain::quiz::Quiz,
    models::domain::quiz_attempt::ScoredResponse,
    models::dto::request::ResponseInput,
};

/// Pure scoring engine: maps a quiz's answer key and a submitted
/// response set to scored responses plus the aggregate score.
///
/// A response naming a question the quiz does not contain fails the
/// whole submission with a validation error; nothing is persisted for
/// a malformed submission. Duplicate question ids in a submission are
/// each scored on their own.
pub fn score_submission(
    quiz: &Quiz,
    responses: &[ResponseInput],
) -> AppResult<(u32, Vec<ScoredResponse>)> {
    let mut score: u32 = 0;
    let mut scored = Vec::with_capacity(responses.len());

    for response in responses {
        let question = quiz.find_question(&response.question_id).ok_or_else(|| {
            AppError::validation(format!(
                "Response references unknown question id '{}'",
                response.question_id
            ))
        })?;

        let is_correct = question.correct_answer.loose_eq(&response.selected_answer);
        if is_correct {
            score = score.saturating_add(question.marks);
        }

        scored.push(ScoredResponse {
            question_id: response.question_id.clone(),
            selected_answer: response.selected_answer.clone(),
            is_correct,
        });
    }

    Ok((score, scored))
}
