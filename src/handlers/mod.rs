pub mod auth_handler;
pub mod quiz_handler;

pub use auth_handler::{google_auth, login, me, signup};
pub use quiz_handler::{
    create_quiz, delete_quiz, get_quiz, health_check, list_quizzes, list_subjects, submit_attempt,
    update_quiz,
};
