//! Helper functions for creating specific error types

use super::types::PreclearError;

/// Helper functions for creating specific errors
impl PreclearError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            PreclearError::Config(_) => "CONFIG_ERROR",
            PreclearError::Serialization(_) => "SERIALIZATION_ERROR",
            PreclearError::Yaml(_) => "YAML_ERROR",
            PreclearError::Io(_) => "IO_ERROR",
            PreclearError::Validation(_) => "VALIDATION_ERROR",
            PreclearError::NotFound(_) => "NOT_FOUND",
            PreclearError::Conflict(_) => "CONFLICT",
            PreclearError::BadRequest(_) => "BAD_REQUEST",
            PreclearError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
