//! Mapping of [`CrudError`] onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::error::CrudError;

/// Body sent for backend failures; details only go to the log.
const STORAGE_FAILURE_BODY: &str = "Storage failure";

impl CrudError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CrudError::BadRequest(_)
            | CrudError::Json(_)
            | CrudError::InvalidNumber(_)
            | CrudError::InvalidOperator(_)
            | CrudError::DivisionByZero => StatusCode::BAD_REQUEST,
            CrudError::NotFound(_) => StatusCode::NOT_FOUND,
            CrudError::Storage(_) | CrudError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CrudError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            return (status, self.to_string()).into_response();
        }

        error!(error = %self, "request failed");
        (status, STORAGE_FAILURE_BODY).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CrudError::BadRequest("Invalid JSON".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CrudError::NotFound("Note not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CrudError::Storage("locked".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = CrudError::NotFound("Task not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = CrudError::Storage("disk I/O error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
