//! Settings validation logic

use crate::config::{Destination, Settings};
use crate::error::CopywayError;
use anyhow::Result;

/// Validate every destination in the settings
///
/// # Errors
///
/// Returns an error if any destination is invalid
#[inline]
pub fn validate_settings(settings: &Settings) -> Result<()> {
    for (index, destination) in settings.destinations.iter().enumerate() {
        validate_destination(destination, index)?;
    }
    Ok(())
}

/// Validate a single destination
///
/// The path is not checked for existence; a missing folder is reported when
/// a copy is attempted.
///
/// # Errors
///
/// Returns an error if:
/// - The path or description is blank
/// - The extension override contains a path separator
#[inline]
pub fn validate_destination(destination: &Destination, index: usize) -> Result<()> {
    let context = format!("Destination #{}", index + 1);

    if destination.path.trim().is_empty() {
        return Err(CopywayError::configuration(format!("{context}: Path cannot be empty")).into());
    }

    if destination.description.trim().is_empty() {
        return Err(
            CopywayError::configuration(format!("{context}: Description cannot be empty")).into(),
        );
    }

    if let Some(extension) = destination.extension.as_deref()
        && extension.contains(['/', '\\'])
    {
        return Err(CopywayError::configuration(format!(
            "{context}: Extension '{extension}' cannot contain a path separator"
        ))
        .into());
    }

    Ok(())
}
