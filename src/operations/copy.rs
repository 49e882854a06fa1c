//! Copy resolution engine
//!
//! Resolves where a document lands inside a destination, enforces the
//! overwrite and rename policies, and performs the single write.

use crate::config::Destination;
use crate::operations::result::{CopyFailure, CopyResult};
use crate::system::FileStore;
use crate::utils::path::{expand_tilde, numbered_file_name, resolve_file_name};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Copies document content into a destination through a [`FileStore`]
///
/// The service is stateless: every call re-queries the store. A file created
/// in the destination between the existence check and the write is not
/// detected.
#[non_exhaustive]
pub struct CopyService<'src> {
    store: &'src dyn FileStore,
}

impl<'src> CopyService<'src> {
    /// Create a copy service backed by `store`
    #[must_use]
    #[inline]
    pub fn new(store: &'src dyn FileStore) -> Self {
        Self { store }
    }

    /// Copy `content` into `destination` under the resolved file name
    ///
    /// An existing file is replaced only when `destination.overwrite` is set;
    /// otherwise the result is a `file_exists` failure and nothing is written.
    #[inline]
    pub fn copy(&self, content: &str, source_name: &str, destination: &Destination) -> CopyResult {
        let (dir, file_name) = self.prepare(source_name, destination);
        debug!(
            "Copying '{}' into '{}' as '{}'",
            source_name,
            dir.display(),
            file_name
        );

        self.try_copy(content, source_name, &dir, &file_name, destination.overwrite)
            .unwrap_or_else(|e| Err(Self::wrap_io(&e)))
    }

    /// Copy `content` into `destination`, picking `{base}_{n}{ext}` on collision
    ///
    /// `destination.overwrite` is ignored. Candidates are probed with
    /// `n = 1, 2, ...` until a free name turns up; there is no upper bound.
    #[inline]
    pub fn copy_with_rename(
        &self,
        content: &str,
        source_name: &str,
        destination: &Destination,
    ) -> CopyResult {
        let (dir, file_name) = self.prepare(source_name, destination);
        debug!(
            "Copying '{}' into '{}' with rename from '{}'",
            source_name,
            dir.display(),
            file_name
        );

        self.try_copy_with_rename(content, &dir, &file_name)
            .unwrap_or_else(|e| Err(Self::wrap_io(&e)))
    }

    /// Check whether `file_name` already exists under `dest_path`
    ///
    /// Store errors are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file store fails the existence check
    #[inline]
    pub fn file_exists(&self, dest_path: &str, file_name: &str) -> io::Result<bool> {
        let home = self.store.home_dir();
        let target = expand_tilde(dest_path, home.as_deref()).join(file_name);
        self.store.file_exists(&target)
    }

    fn prepare(&self, source_name: &str, destination: &Destination) -> (PathBuf, String) {
        let home = self.store.home_dir();
        let dir = expand_tilde(&destination.path, home.as_deref());
        let file_name = resolve_file_name(source_name, destination.extension.as_deref());
        (dir, file_name)
    }

    /// Outer `Err` is a store failure, inner result is the modeled outcome
    fn try_copy(
        &self,
        content: &str,
        source_name: &str,
        dir: &Path,
        file_name: &str,
        overwrite: bool,
    ) -> io::Result<CopyResult> {
        if !self.store.directory_exists(dir)? {
            warn!("Destination directory not found: {}", dir.display());
            return Ok(Err(CopyFailure::dir_not_found(dir)));
        }

        let target = dir.join(file_name);
        let exists = self.store.file_exists(&target)?;
        if exists && !overwrite {
            debug!("Refusing to overwrite {}", target.display());
            return Ok(Err(CopyFailure::file_exists(source_name)));
        }

        self.store.write_file(&target, content.as_bytes())?;
        if exists {
            info!("Overwrote {}", target.display());
        } else {
            info!("Copied to {}", target.display());
        }
        Ok(Ok(target))
    }

    fn try_copy_with_rename(
        &self,
        content: &str,
        dir: &Path,
        file_name: &str,
    ) -> io::Result<CopyResult> {
        if !self.store.directory_exists(dir)? {
            warn!("Destination directory not found: {}", dir.display());
            return Ok(Err(CopyFailure::dir_not_found(dir)));
        }

        let mut counter: u64 = 0;
        let mut target = dir.join(file_name);
        while self.store.file_exists(&target)? {
            counter += 1;
            target = dir.join(numbered_file_name(file_name, counter));
        }
        debug!("Resolved free name after {} collision(s)", counter);

        self.store.write_file(&target, content.as_bytes())?;
        info!("Copied to {}", target.display());
        Ok(Ok(target))
    }

    fn wrap_io(err: &io::Error) -> CopyFailure {
        warn!("Copy failed: {}", err);
        CopyFailure::io_error(err)
    }
}
