//! Type conversions for PreclearError

use super::types::PreclearError;

impl From<tracing_subscriber::filter::ParseError> for PreclearError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        PreclearError::Config(format!("Invalid log filter: {}", err))
    }
}

impl From<tracing_subscriber::util::TryInitError> for PreclearError {
    fn from(err: tracing_subscriber::util::TryInitError) -> Self {
        PreclearError::Internal(format!("Failed to install tracing subscriber: {}", err))
    }
}
