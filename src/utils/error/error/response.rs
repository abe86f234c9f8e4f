//! HTTP response handling for errors

use super::types::PreclearError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for PreclearError {
    fn status_code(&self) -> StatusCode {
        match self {
            PreclearError::Validation(_)
            | PreclearError::BadRequest(_)
            | PreclearError::Serialization(_) => StatusCode::BAD_REQUEST,
            PreclearError::NotFound(_) => StatusCode::NOT_FOUND,
            PreclearError::Conflict(_) => StatusCode::CONFLICT,
            PreclearError::Config(_)
            | PreclearError::Yaml(_)
            | PreclearError::Io(_)
            | PreclearError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let message = if status_code.is_server_error() {
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
