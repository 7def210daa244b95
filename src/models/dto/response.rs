use serde::Serialize;

/// The uniform success envelope: `{ success, data, count? }`.
/// The error side lives with `AppError` in `errors.rs`.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn data(data: T) -> Self {
        ApiEnvelope {
            success: true,
            count: None,
            data,
        }
    }

    pub fn list(data: T, count: usize) -> Self {
        ApiEnvelope {
            success: true,
            count: Some(count),
            data,
        }
    }
}
