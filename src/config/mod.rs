//! Settings management module
//!
//! Handles the persisted destination list: JSON loading with defaults,
//! JSON schema validation, semantic validation, and saving

pub mod schema;
pub mod store;
pub mod validation;

use crate::error::CopywayError;
use crate::system::FileStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the settings file location
pub const SETTINGS_ENV: &str = "COPYWAY_SETTINGS";

/// A named copy target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Destination folder, may start with `~`
    pub path: String,

    /// Label shown when choosing among destinations
    pub description: String,

    /// Replace an existing file of the same name without asking
    #[serde(default)]
    pub overwrite: bool,

    /// Extension override; `Some("")` strips the extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Plugin-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Configured destinations, in display order
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

impl Settings {
    /// Load settings from file, falling back to defaults when it is absent
    pub fn load(store: &dyn FileStore, path: &Path) -> anyhow::Result<Self> {
        store::load_settings(store, path)
    }

    /// Persist settings to file
    pub fn save(&self, store: &dyn FileStore, path: &Path) -> anyhow::Result<()> {
        store::save_settings(store, self, path)
    }

    /// Validate destination records
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_settings(self)
    }

    /// Append a destination after validating it
    pub fn add_destination(&mut self, destination: Destination) -> anyhow::Result<()> {
        validation::validate_destination(&destination, self.destinations.len())?;
        self.destinations.push(destination);
        Ok(())
    }

    /// Remove the destination at a zero-based index
    pub fn remove_destination(&mut self, index: usize) -> anyhow::Result<Destination> {
        if index >= self.destinations.len() {
            return Err(CopywayError::configuration(format!(
                "Destination #{} does not exist ({} configured)",
                index + 1,
                self.destinations.len()
            ))
            .into());
        }
        Ok(self.destinations.remove(index))
    }
}

/// Default settings file location: `<config dir>/copyway/settings.json`
#[must_use]
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("copyway")
        .join("settings.json")
}
