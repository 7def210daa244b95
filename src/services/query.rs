use regex::{Regex, RegexBuilder};

use crate::{
    errors::{AppError, AppResult},
    models::domain::quiz::Quiz,
    models::dto::request::QuizListParams,
};

pub const VALID_SORT_OPTIONS: [&str; 6] = [
    "a-z",
    "z-a",
    "newest",
    "oldest",
    "duration-asc",
    "duration-desc",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizSort {
    TitleAsc,
    TitleDesc,
    #[default]
    Newest,
    Oldest,
    DurationAsc,
    DurationDesc,
}

impl QuizSort {
    /// Parses the wire value, case-insensitively. Anything outside the
    /// six known options is rejected with a message enumerating them.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.to_lowercase().as_str() {
            "a-z" => Ok(QuizSort::TitleAsc),
            "z-a" => Ok(QuizSort::TitleDesc),
            "newest" => Ok(QuizSort::Newest),
            "oldest" => Ok(QuizSort::Oldest),
            "duration-asc" => Ok(QuizSort::DurationAsc),
            "duration-desc" => Ok(QuizSort::DurationDesc),
            _ => Err(AppError::validation(format!(
                "Invalid sort option. Valid options are: {}",
                VALID_SORT_OPTIONS.join(", ")
            ))),
        }
    }
}

/// Validated filter/sort parameters for the public quiz listing.
/// Operates over the store's `is_public` set; everything here is
/// in-process and deterministic.
#[derive(Clone, Debug)]
pub struct QuizQuery {
    subject: Option<String>,
    search: Option<Regex>,
    sort: QuizSort,
}

impl QuizQuery {
    pub fn from_params(params: &QuizListParams) -> AppResult<Self> {
        let sort = match params.sort.as_deref() {
            Some(value) => QuizSort::parse(value)?,
            None => QuizSort::default(),
        };

        // The literal "all" disables the subject filter.
        let subject = params
            .subject
            .clone()
            .filter(|s| s != "all");

        let search = match params.search.as_deref() {
            Some(term) => {
                let pattern = RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| AppError::Internal(format!("Bad search pattern: {}", e)))?;
                Some(pattern)
            }
            None => None,
        };

        Ok(QuizQuery {
            subject,
            search,
            sort,
        })
    }

    pub fn matches(&self, quiz: &Quiz) -> bool {
        if let Some(subject) = &self.subject {
            // Exact, case-sensitive subject match.
            if &quiz.subject != subject {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !search.is_match(&quiz.title) {
                return false;
            }
        }
        true
    }

    /// Filters and orders the public quiz set.
    pub fn apply(&self, quizzes: Vec<Quiz>) -> Vec<Quiz> {
        let mut matched: Vec<Quiz> = quizzes.into_iter().filter(|q| self.matches(q)).collect();

        match self.sort {
            QuizSort::TitleAsc => matched.sort_by(|a, b| a.title.cmp(&b.title)),
            QuizSort::TitleDesc => matched.sort_by(|a, b| b.title.cmp(&a.title)),
            QuizSort::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            QuizSort::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            QuizSort::DurationAsc => {
                matched.sort_by(|a, b| a.duration_minutes.cmp(&b.duration_minutes))
            }
            QuizSort::DurationDesc => {
                matched.sort_by(|a, b| b.duration_minutes.cmp(&a.duration_minutes))
            }
        }

        matched
    }
}
