//! Path and file-name manipulation utilities

use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the given home directory
///
/// Only the whole path `~` or a `~/` prefix is expanded. A `~` anywhere else
/// (`notes/~/drafts`, `~alice`) is left untouched, as is every path when no
/// home directory is known. Extra separators after `~/` stay inside the home
/// directory: `~//notes` is `<home>/notes`.
#[must_use]
pub fn expand_tilde(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }

    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(path),
    }
}

/// Normalize an extension override
///
/// - `None` stays `None` (keep the source extension)
/// - `""` stays `""` (strip the extension)
/// - anything else gets a leading `.` unless it already has one
#[must_use]
pub fn normalize_extension(extension: Option<&str>) -> Option<String> {
    let extension = extension?;
    if extension.is_empty() || extension.starts_with('.') {
        return Some(extension.to_owned());
    }
    Some(format!(".{extension}"))
}

/// Split a file name into base name and extension at the last `.`
///
/// The extension keeps its leading dot. A name without a dot has an empty
/// extension.
///
/// ```
/// use copyway::utils::path::split_file_name;
///
/// assert_eq!(split_file_name("file.test.md"), ("file.test", ".md"));
/// assert_eq!(split_file_name("README"), ("README", ""));
/// ```
#[must_use]
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(index) => file_name.split_at(index),
        None => (file_name, ""),
    }
}

/// Apply an extension override to a source file name
#[must_use]
pub fn resolve_file_name(source_name: &str, extension: Option<&str>) -> String {
    match normalize_extension(extension) {
        None => source_name.to_owned(),
        Some(new_extension) => {
            let (base, _) = split_file_name(source_name);
            format!("{base}{new_extension}")
        }
    }
}

/// Name of the `counter`-th rename candidate, e.g. `note_2.md`
#[must_use]
pub fn numbered_file_name(file_name: &str, counter: u64) -> String {
    let (base, extension) = split_file_name(file_name);
    format!("{base}_{counter}{extension}")
}

/// Final component of a path as a displayable string
#[must_use]
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
