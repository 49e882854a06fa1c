//! Copy-file command: destination choice, collision prompt, and notices

use crate::config::Destination;
use crate::operations::copy::CopyService;
use crate::operations::result::{CopyErrorKind, CopyFailure, CopyResult};
use crate::utils::path::{display_file_name, resolve_file_name};
use std::fmt;
use tracing::{debug, info};

/// The document being copied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFile {
    /// File name including extension, without directories
    pub name: String,
    pub content: String,
}

/// How the user wants a name collision handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    Overwrite,
    Rename,
    Cancel,
}

/// Asks the user to make the choices a copy needs
pub trait Prompter {
    /// Pick one of `destinations` by index; `None` cancels
    ///
    /// Implementations show descriptions only, never raw paths.
    fn select_destination(&self, destinations: &[Destination]) -> Option<usize>;

    /// Decide what to do about `file_name` already existing at the destination
    fn resolve_conflict(&self, file_name: &str) -> ConflictChoice;
}

/// User-facing outcome of the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Copied {
        file_name: String,
        description: String,
    },
    Overwrote {
        file_name: String,
        description: String,
    },
    CopiedAs {
        file_name: String,
        description: String,
    },
    NoActiveFile,
    NoDestinations,
    DirectoryMissing {
        path: String,
    },
    CopyFailed {
        message: String,
    },
    PermissionDenied {
        path: String,
    },
}

impl Notice {
    /// Whether this notice reports a failure
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(
            *self,
            Self::Copied { .. } | Self::Overwrote { .. } | Self::CopiedAs { .. }
        )
    }

    /// Process exit code for this notice
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Copied { .. } | Self::Overwrote { .. } | Self::CopiedAs { .. } => 0,
            Self::NoDestinations => 1,
            Self::NoActiveFile => 2,
            Self::DirectoryMissing { .. } => 3,
            Self::PermissionDenied { .. } => 4,
            Self::CopyFailed { .. } => 5,
        }
    }

    /// Map a failed copy to the notice shown for it
    ///
    /// `file_exists` only reaches here when the destination changed between
    /// the collision check and the copy, and is reported as a copy failure.
    #[must_use]
    pub fn from_failure(failure: &CopyFailure, destination: &Destination) -> Self {
        match failure.error {
            CopyErrorKind::DirNotFound => Self::DirectoryMissing {
                path: destination.path.clone(),
            },
            CopyErrorKind::IoError if failure.is_permission_denied() => Self::PermissionDenied {
                path: destination.path.clone(),
            },
            CopyErrorKind::IoError | CopyErrorKind::FileExists => Self::CopyFailed {
                message: failure.message.clone(),
            },
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied {
                file_name,
                description,
            } => write!(f, "Copied \"{file_name}\" to \"{description}\""),
            Self::Overwrote {
                file_name,
                description,
            } => write!(f, "Overwrote \"{file_name}\" in \"{description}\""),
            Self::CopiedAs {
                file_name,
                description,
            } => write!(f, "Copied as \"{file_name}\" to \"{description}\""),
            Self::NoActiveFile => f.write_str("No active file to copy"),
            Self::NoDestinations => f.write_str(
                "No copy destinations configured. Please add destinations in settings.",
            ),
            Self::DirectoryMissing { path } => {
                write!(f, "Destination folder does not exist: {path}")
            }
            Self::CopyFailed { message } => write!(f, "Failed to copy file: {message}"),
            Self::PermissionDenied { path } => write!(f, "Permission denied: {path}"),
        }
    }
}

/// What the command did with the resolved destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyMode {
    Fresh,
    Overwrite,
    Rename,
}

/// Copies the active document to a configured destination
#[non_exhaustive]
pub struct CopyFileCommand<'src> {
    service: CopyService<'src>,
    destinations: &'src [Destination],
    prompter: &'src dyn Prompter,
}

impl<'src> CopyFileCommand<'src> {
    /// Create the command over a copy service, the destination list, and a prompter
    #[must_use]
    #[inline]
    pub fn new(
        service: CopyService<'src>,
        destinations: &'src [Destination],
        prompter: &'src dyn Prompter,
    ) -> Self {
        Self {
            service,
            destinations,
            prompter,
        }
    }

    /// Run the command; `None` means the user cancelled
    #[inline]
    pub fn execute(&self, active_file: Option<&ActiveFile>) -> Option<Notice> {
        let Some(file) = active_file else {
            return Some(Notice::NoActiveFile);
        };

        let destination = match self.destinations {
            [] => return Some(Notice::NoDestinations),
            [only] => only,
            many => {
                let index = self.prompter.select_destination(many)?;
                many.get(index)?
            }
        };
        debug!("Selected destination '{}'", destination.description);

        self.perform_copy(file, destination)
    }

    fn perform_copy(&self, file: &ActiveFile, destination: &Destination) -> Option<Notice> {
        if destination.overwrite {
            let result = self.service.copy(&file.content, &file.name, destination);
            return Some(Self::notice(result, file, destination, CopyMode::Fresh));
        }

        let target_name = resolve_file_name(&file.name, destination.extension.as_deref());
        let exists = match self.service.file_exists(&destination.path, &target_name) {
            Ok(exists) => exists,
            Err(e) => {
                return Some(Notice::from_failure(&CopyFailure::io_error(&e), destination));
            }
        };

        if !exists {
            let result = self.service.copy(&file.content, &file.name, destination);
            return Some(Self::notice(result, file, destination, CopyMode::Fresh));
        }

        match self.prompter.resolve_conflict(&target_name) {
            ConflictChoice::Cancel => {
                info!("Copy of '{}' cancelled", file.name);
                None
            }
            ConflictChoice::Overwrite => {
                let forced = Destination {
                    overwrite: true,
                    ..destination.clone()
                };
                let result = self.service.copy(&file.content, &file.name, &forced);
                Some(Self::notice(result, file, destination, CopyMode::Overwrite))
            }
            ConflictChoice::Rename => {
                let result = self
                    .service
                    .copy_with_rename(&file.content, &file.name, destination);
                Some(Self::notice(result, file, destination, CopyMode::Rename))
            }
        }
    }

    fn notice(
        result: CopyResult,
        file: &ActiveFile,
        destination: &Destination,
        mode: CopyMode,
    ) -> Notice {
        let path = match result {
            Ok(path) => path,
            Err(failure) => return Notice::from_failure(&failure, destination),
        };

        let description = destination.description.clone();
        match mode {
            CopyMode::Fresh => Notice::Copied {
                file_name: file.name.clone(),
                description,
            },
            CopyMode::Overwrite => Notice::Overwrote {
                file_name: file.name.clone(),
                description,
            },
            CopyMode::Rename => {
                let written = display_file_name(&path);
                Notice::CopiedAs {
                    file_name: if written.is_empty() {
                        file.name.clone()
                    } else {
                        written
                    },
                    description,
                }
            }
        }
    }
}
