//! Custom error types with exit codes

use crate::operations::command::Notice;
use thiserror::Error;

/// Main error type for copyway operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CopywayError {
    /// Configuration Error - settings file missing fields, malformed or invalid
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Copy Error - a copy attempt ended with a failure notice
    #[error("{notice}")]
    Copy { notice: Notice },
}

impl CopywayError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Copy { ref notice } => notice.exit_code(),
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Wrap a failure notice
    #[inline]
    #[must_use]
    pub const fn copy(notice: Notice) -> Self {
        Self::Copy { notice }
    }
}
