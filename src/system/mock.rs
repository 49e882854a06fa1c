//! Mock file store implementation for testing

use super::FileStore;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Copy-engine facing operations recorded by `MockFileStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DirectoryExists,
    FileExists,
    WriteFile,
}

/// In-memory implementation of the `FileStore` trait for testing
///
/// `MockFileStore` keeps files and directories in memory, records every
/// existence check and write in call order, and can be told to fail a given
/// operation with a chosen error.
///
/// # Example
/// ```
/// use copyway::system::{FileStore, MockFileStore};
/// use std::path::Path;
///
/// let store = MockFileStore::new()
///     .with_home("/home/user").unwrap()
///     .with_file("/notes/a.md", b"# A").unwrap()
///     .with_dir("/archive").unwrap();
///
/// assert!(store.file_exists(Path::new("/notes/a.md")).unwrap());
/// assert!(store.directory_exists(Path::new("/archive")).unwrap());
/// ```
#[derive(Clone)]
pub struct MockFileStore {
    state: Arc<RwLock<MockFileStoreState>>,
}

struct MockFileStoreState {
    home: Option<PathBuf>,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    failures: HashMap<Operation, (io::ErrorKind, String)>,
    calls: Vec<(Operation, PathBuf)>,
}

fn poisoned<E: ToString>(e: E) -> io::Error {
    io::Error::other(e.to_string())
}

impl MockFileStore {
    /// Create a new `MockFileStore` containing only the root directory
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockFileStoreState {
                home: None,
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
                failures: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Set the home directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn with_home<P: AsRef<Path>>(self, home: P) -> io::Result<Self> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.home = Some(home.as_ref().to_path_buf());
        drop(state);
        Ok(self)
    }

    /// Add a file with contents, creating its parent directories (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self.state.write().map_err(poisoned)?;

        if let Some(parent) = path_buf.parent() {
            Self::ensure_parent_dirs(&mut state.dirs, parent);
        }

        state.files.insert(path_buf, contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Add a directory and its ancestors (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let mut state = self.state.write().map_err(poisoned)?;
        Self::ensure_parent_dirs(&mut state.dirs, path.as_ref());
        drop(state);
        Ok(self)
    }

    /// Make every call of `operation` fail with the given error (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn with_failure(
        self,
        operation: Operation,
        kind: io::ErrorKind,
        message: &str,
    ) -> io::Result<Self> {
        let mut state = self.state.write().map_err(poisoned)?;
        state
            .failures
            .insert(operation, (kind, message.to_owned()));
        drop(state);
        Ok(self)
    }

    /// Existence checks and writes performed so far, in call order
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn calls(&self) -> io::Result<Vec<(Operation, PathBuf)>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.calls.clone())
    }

    /// Number of writes performed so far
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn write_count(&self) -> io::Result<usize> {
        Ok(self
            .calls()?
            .iter()
            .filter(|(op, _)| *op == Operation::WriteFile)
            .count())
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor == Path::new("") {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Log the call, then return the injected failure for it, if any
    fn record(&self, operation: Operation, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.calls.push((operation, path.to_path_buf()));
        match state.failures.get(&operation) {
            Some((kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockFileStore {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for MockFileStore {
    /// A poisoned state lock is logged and reported as no home directory,
    /// since this method has no error channel
    #[inline]
    fn home_dir(&self) -> Option<PathBuf> {
        match self.state.read() {
            Ok(state) => state.home.clone(),
            Err(e) => {
                warn!("Mock file store state is poisoned: {e}");
                None
            }
        }
    }

    #[inline]
    fn directory_exists(&self, path: &Path) -> io::Result<bool> {
        self.record(Operation::DirectoryExists, path)?;
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.dirs.contains(path))
    }

    #[inline]
    fn file_exists(&self, path: &Path) -> io::Result<bool> {
        self.record(Operation::FileExists, path)?;
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.files.contains_key(path))
    }

    #[inline]
    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.record(Operation::WriteFile, path)?;
        let mut state = self.state.write().map_err(poisoned)?;

        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        state.files.insert(path.to_path_buf(), contents.to_vec());
        drop(state);
        Ok(())
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self.state.read().map_err(poisoned)?;
        let bytes = state.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        String::from_utf8(result)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        Self::ensure_parent_dirs(&mut state.dirs, path);
        drop(state);
        Ok(())
    }
}
