//! Outcome of a single copy attempt

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a copy attempt did not write anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyErrorKind {
    /// The target name is taken and the destination forbids overwriting
    FileExists,
    /// The destination directory does not exist
    DirNotFound,
    /// The file store failed during an existence check or the write
    IoError,
}

impl CopyErrorKind {
    /// Stable identifier used in logs
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileExists => "file_exists",
            Self::DirNotFound => "dir_not_found",
            Self::IoError => "io_error",
        }
    }
}

impl fmt::Display for CopyErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure half of [`CopyResult`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CopyFailure {
    pub error: CopyErrorKind,
    pub message: String,
}

impl CopyFailure {
    /// Destination directory is missing
    #[must_use]
    pub fn dir_not_found(dir: &std::path::Path) -> Self {
        Self {
            error: CopyErrorKind::DirNotFound,
            message: format!("Directory not found: {}", dir.display()),
        }
    }

    /// Target name is taken and overwriting is not allowed
    #[must_use]
    pub fn file_exists(source_name: &str) -> Self {
        Self {
            error: CopyErrorKind::FileExists,
            message: format!("File already exists: {source_name}"),
        }
    }

    /// Wrap an error raised by the file store
    #[must_use]
    pub fn io_error(err: &std::io::Error) -> Self {
        Self {
            error: CopyErrorKind::IoError,
            message: format!("I/O error: {err}"),
        }
    }

    /// Whether the wrapped message reports a permission problem
    ///
    /// The file store has no dedicated permission-denied outcome, so this
    /// sniffs the message for `Permission` or `EACCES` (case-sensitive).
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.error == CopyErrorKind::IoError
            && (self.message.contains("Permission") || self.message.contains("EACCES"))
    }
}

/// Success carries the absolute path actually written
pub type CopyResult = Result<PathBuf, CopyFailure>;
