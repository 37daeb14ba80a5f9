//! Action settings, optionally read from a `bulk_edit.toml`.

use std::path::Path;

use bulkedit_model::DisplayContext;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkEditSettings {
    /// Form display mode the bundle widgets are rendered with.
    pub surface: String,
    /// Display whose configurability decides whether a field is offered.
    pub display_context: DisplayContext,
    pub options_title: String,
    pub add_values_title: String,
    pub add_values_description: String,
    pub selector_title: String,
    pub empty_selector_title: String,
    pub selector_weight: i32,
    /// Field whose first item's `value` overrides the generated revision log.
    pub revision_log_field: String,
}

impl Default for BulkEditSettings {
    fn default() -> Self {
        Self {
            surface: "bulk_edit".to_string(),
            display_context: DisplayContext::Form,
            options_title: "Options".to_string(),
            add_values_title: "Add values to multi-value fields".to_string(),
            add_values_description: "New values of multi-value fields will be added to the \
                                     existing ones instead of overwriting them."
                .to_string(),
            selector_title: "Select fields to change".to_string(),
            empty_selector_title: "There are no fields available to modify".to_string(),
            selector_weight: -50,
            revision_log_field: "revision_log".to_string(),
        }
    }
}

impl BulkEditSettings {
    pub fn from_toml_str(contents: &str) -> crate::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads settings from `path`, failing on IO or parse errors.
    pub fn read_from(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reads settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No bulk edit settings at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::read_from(path) {
            Ok(settings) => {
                info!("Loaded bulk edit settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to read bulk edit settings {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }
}
