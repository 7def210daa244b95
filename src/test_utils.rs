pub mod fixtures {
    use chrono::{DateTime, Utc};

    use crate::auth::Claims;
    use crate::models::domain::answer::AnswerValue;
    use crate::models::domain::question::{Question, QuestionKind};
    use crate::models::domain::quiz::Quiz;
    use crate::models::domain::user::UserRole;

    /// A quiz with one 2-mark multiple-choice question (`"B"` correct)
    /// and one 3-mark fill-in question (`4` correct).
    pub fn test_quiz(owner_id: &str, is_public: bool) -> Quiz {
        let mut mcq = Question::new(
            QuestionKind::MultipleChoice,
            "Pick the letter B",
            AnswerValue::Text("B".to_string()),
            2,
        );
        mcq.options = Some(vec!["A".into(), "B".into(), "C".into(), "D".into()]);

        let fill = Question::new(
            QuestionKind::FillBlank,
            "2 + 2 = ?",
            AnswerValue::Number(4.0),
            3,
        );

        Quiz::new("Test Quiz", "Math", 15, owner_id, vec![mcq, fill], is_public)
    }

    pub fn test_quiz_titled(title: &str, subject: &str, created_at: DateTime<Utc>) -> Quiz {
        let mut quiz = test_quiz("owner-1", true);
        quiz.title = title.to_string();
        quiz.subject = subject.to_string();
        quiz.created_at = created_at;
        quiz
    }

    pub fn test_claims(user_id: &str, role: UserRole) -> Claims {
        Claims {
            sub: user_id.to_string(),
            name: "Test User".to_string(),
            email: format!("{}@example.com", user_id),
            role,
            iat: 0,
            exp: 9_999_999_999,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::user::UserRole;

    #[test]
    fn test_quiz_fixture_shape() {
        let quiz = test_quiz("owner-1", true);

        assert_eq!(quiz.owner_id, "owner-1");
        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.total_marks(), 5);
        assert!(quiz.validation_errors().is_empty());
    }

    #[test]
    fn test_claims_fixture_role() {
        let claims = test_claims("admin-1", UserRole::Admin);
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.sub, "admin-1");
    }
}
