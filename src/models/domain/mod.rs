pub mod answer;
pub mod question;
pub mod quiz;
pub mod quiz_attempt;
pub mod user;

pub use answer::AnswerValue;
pub use question::{Question, QuestionKind};
pub use quiz::Quiz;
pub use quiz_attempt::{QuizAttempt, ScoredResponse};
pub use user::{User, UserRole};
