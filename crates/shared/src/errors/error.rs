use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope; `result` is always the empty string.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub result: String,
    pub message: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            result: String::new(),
            message: message.into(),
            code,
        }
    }
}
