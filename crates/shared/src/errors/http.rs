use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Internal(String),
}

impl HttpError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        HttpError::BadRequest(msg.into())
    }
}

// Use-case failures are reported uniformly as 400 with the error text.
impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        HttpError::BadRequest(err.to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        debug!("message: {}, code: {}", msg, status.as_u16());

        let body = Json(ErrorResponse::new(status.as_u16(), msg));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;

    #[test]
    fn service_errors_collapse_to_bad_request() {
        let not_found: HttpError = ServiceError::Repo(RepositoryError::NotFound).into();
        assert!(matches!(not_found, HttpError::BadRequest(ref m) if m == "Not found"));

        let affected: HttpError = ServiceError::Repo(RepositoryError::AffectedRows(0)).into();
        assert!(matches!(affected, HttpError::BadRequest(ref m) if m == "Total affected: 0"));

        let deadline: HttpError = ServiceError::DeadlineExceeded.into();
        assert!(
            matches!(deadline, HttpError::BadRequest(ref m) if m == "context deadline exceeded")
        );
    }

    #[test]
    fn renders_error_envelope() {
        let response = HttpError::bad_request("boom").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let envelope = serde_json::to_value(ErrorResponse::new(400, "boom")).unwrap();
        assert_eq!(
            envelope,
            serde_json::json!({ "result": "", "message": "boom", "code": 400 })
        );
    }
}
