//! Real file store implementation using `std::fs`

use super::FileStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Production implementation of the `FileStore` trait
///
/// Delegates directly to the standard library's filesystem functions and to
/// `dirs` for the home directory.
#[derive(Debug, Clone, Copy)]
pub struct RealFileStore;

impl RealFileStore {
    /// Create a new `RealFileStore` instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Stat a path, mapping "nothing there" to `None`
    ///
    /// `NotADirectory` covers a path whose prefix is a regular file.
    fn metadata(path: &Path) -> io::Result<Option<fs::Metadata>> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for RealFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for RealFileStore {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn directory_exists(&self, path: &Path) -> io::Result<bool> {
        Ok(Self::metadata(path)?.is_some_and(|m| m.is_dir()))
    }

    fn file_exists(&self, path: &Path) -> io::Result<bool> {
        Ok(Self::metadata(path)?.is_some_and(|m| m.is_file()))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}
