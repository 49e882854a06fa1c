//! JSON settings loading and saving

use crate::config::Settings;
use crate::error::CopywayError;
use crate::system::FileStore;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Load and parse JSON settings from file
///
/// A missing file yields the default settings. Fields absent from stored
/// data are filled from their defaults.
pub fn load_settings(store: &dyn FileStore, path: &Path) -> Result<Settings> {
    if !store
        .file_exists(path)
        .with_context(|| format!("Failed to inspect settings file: {}", path.display()))?
    {
        debug!("No settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let content = store
        .read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let value: Value = serde_json::from_str(&content).map_err(|e| {
        CopywayError::configuration(format!(
            "Failed to parse settings file {}: {e}",
            path.display()
        ))
    })?;

    crate::config::schema::validate_against_schema(&value).map_err(|e| {
        CopywayError::configuration(format!("{}: {e}", path.display()))
    })?;

    let settings: Settings = serde_json::from_value(value).map_err(|e| {
        CopywayError::configuration(format!(
            "Failed to read settings from {}: {e}",
            path.display()
        ))
    })?;

    settings.validate()?;

    debug!(
        "Loaded {} destination(s) from {}",
        settings.destinations.len(),
        path.display()
    );
    Ok(settings)
}

/// Write settings to file as pretty-printed JSON, creating its directory
pub fn save_settings(store: &dyn FileStore, settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        store.create_dir_all(parent).with_context(|| {
            format!("Failed to create settings directory: {}", parent.display())
        })?;
    }

    let mut json =
        serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    json.push('\n');

    store
        .write_file(path, json.as_bytes())
        .with_context(|| format!("Failed to write settings file: {}", path.display()))?;

    debug!("Saved settings to {}", path.display());
    Ok(())
}
