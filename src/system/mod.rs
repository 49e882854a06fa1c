//! File store abstraction for filesystem operations
//!
//! This module provides a unified trait for every filesystem interaction the
//! crate performs, allowing the copy engine and the settings store to be
//! exercised against an in-memory implementation in tests.

use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockFileStore;
pub use real::RealFileStore;

/// Unified trait for filesystem operations
///
/// Every call may block on I/O. Implementations decide their own timeout
/// policy; callers never retry.
///
/// # Implementations
/// - `RealFileStore`: Production implementation using `std::fs` and `dirs`
/// - `MockFileStore`: Test implementation using in-memory storage
pub trait FileStore: Send + Sync {
    /// Home directory used for tilde expansion, if one is known
    fn home_dir(&self) -> Option<PathBuf>;

    /// Check if a path points to an existing directory
    ///
    /// A path that does not exist at all yields `Ok(false)`, the same as a
    /// path that exists but is not a directory.
    fn directory_exists(&self, path: &Path) -> io::Result<bool>;

    /// Check if a path points to an existing regular file
    fn file_exists(&self, path: &Path) -> io::Result<bool>;

    /// Write bytes to a file, creating it or truncating an existing one
    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}
