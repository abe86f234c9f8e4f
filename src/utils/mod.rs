//! Utility modules
//!
//! - **error**: Error taxonomy and HTTP error responses
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{PreclearError, Result};
pub use logging::init_logging;
