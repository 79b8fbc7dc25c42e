use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Uniform success envelope: `{"result": .., "message": "success", "code": 200}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub result: T,
    pub message: String,
    pub code: u16,
}

impl<T> ApiResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            result,
            message: "success".to_string(),
            code: StatusCode::OK.as_u16(),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiResponse {{ message: {}, code: {}, result: {:?} }}",
            self.message, self.code, self.result
        )
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Paginated payload nested inside [`ApiResponse::result`].
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EntriesResponse<T> {
    pub found: i64,
    pub data: Vec<T>,
}

impl<T> EntriesResponse<T> {
    pub fn new(data: Vec<T>, found: i64) -> Self {
        Self { found, data }
    }
}
