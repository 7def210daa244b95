use serde::{Deserialize, Serialize};

/// Answer payloads are polymorphic on the wire: a stored correct
/// answer or a submitted answer may be a string, a number, or a
/// boolean depending on the question kind. The untagged repr keeps
/// the JSON shape (`"B"`, `4`, `true`) while giving the scoring code
/// a real variant to match on.
///
/// Variant order matters for untagged deserialization: booleans and
/// numbers must be tried before the catch-all string.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// Loose equality across the three shapes, matching JS `==`
    /// coercion: same-shape values compare directly (string compare
    /// is exact and case-sensitive), booleans coerce to 1/0 against
    /// numbers, and strings are parsed as numbers when compared
    /// against a numeric or boolean value.
    pub fn loose_eq(&self, other: &AnswerValue) -> bool {
        match (self, other) {
            (AnswerValue::Text(a), AnswerValue::Text(b)) => a == b,
            (AnswerValue::Number(a), AnswerValue::Number(b)) => a == b,
            (AnswerValue::Bool(a), AnswerValue::Bool(b)) => a == b,
            (AnswerValue::Number(n), AnswerValue::Text(s))
            | (AnswerValue::Text(s), AnswerValue::Number(n)) => {
                Self::string_as_number(s).map(|parsed| parsed == *n).unwrap_or(false)
            }
            (AnswerValue::Bool(b), AnswerValue::Number(n))
            | (AnswerValue::Number(n), AnswerValue::Bool(b)) => Self::bool_as_number(*b) == *n,
            (AnswerValue::Bool(b), AnswerValue::Text(s))
            | (AnswerValue::Text(s), AnswerValue::Bool(b)) => Self::string_as_number(s)
                .map(|parsed| parsed == Self::bool_as_number(*b))
                .unwrap_or(false),
        }
    }

    /// `Number(s)` semantics: empty and whitespace-only strings
    /// coerce to 0, anything unparseable is NaN (never equal).
    fn string_as_number(s: &str) -> Option<f64> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Some(0.0);
        }
        trimmed.parse::<f64>().ok()
    }

    fn bool_as_number(b: bool) -> f64 {
        if b {
            1.0
        } else {
            0.0
        }
    }
}
