use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::quiz::Quiz,
    models::domain::user::UserRole,
};

/// Ownership/role check gating quiz mutations: only the quiz owner or
/// an admin may update or delete a quiz.
pub fn can_mutate(quiz: &Quiz, claims: &Claims) -> bool {
    claims.sub == quiz.owner_id || claims.role == UserRole::Admin
}

pub fn require_can_mutate(quiz: &Quiz, claims: &Claims) -> AppResult<()> {
    if !can_mutate(quiz, claims) {
        return Err(AppError::Authorization(
            "Not authorized to modify this quiz".to_string(),
        ));
    }
    Ok(())
}
