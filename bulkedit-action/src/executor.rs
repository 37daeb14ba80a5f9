//! Replays a stored edit configuration onto individual records.

use std::fmt;

use bulkedit_model::{BundleValues, EditConfiguration, FieldDefinitions, Record};
use tracing::{debug, info, warn};

use crate::{BulkEditSettings, Host, Result, ValueMerger};

/// What happened to one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// Nothing is configured for the record's bundle.
    Skipped,
    Modified,
}

impl fmt::Display for ExecuteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => f.write_str("Skip (field is not present on this bundle)"),
            Self::Modified => f.write_str("Modify field values"),
        }
    }
}

/// Applies configured field values to records and saves them.
pub struct Executor {
    host: Host,
    settings: BulkEditSettings,
}

impl Executor {
    pub fn new(host: Host, settings: BulkEditSettings) -> Self {
        Self { host, settings }
    }

    /// Applies `config` to `record`.
    ///
    /// The record's active revision is reloaded before any change. Storage
    /// failures are returned as-is.
    pub fn execute(&self, record: &Record, config: &EditConfiguration) -> Result<ExecuteOutcome> {
        let entity_type = record.entity_type.as_str();
        let bundle = record.bundle.as_str();

        let mut active = self.host.storage.load_active(entity_type, &record.id)?;

        let Some(values) = config.bundle_values(entity_type, bundle) else {
            debug!(entity_type, bundle, id = %record.id, "No configuration for bundle, skipping");
            return Ok(ExecuteOutcome::Skipped);
        };

        let merger = ValueMerger::new(config.add_values);
        let definitions = if merger.is_append() {
            self.host.fields.field_definitions(entity_type, bundle)?
        } else {
            FieldDefinitions::new()
        };

        for (field, submitted) in values {
            let value = if merger.is_append() {
                match definitions.get(field) {
                    Some(definition) => {
                        merger.merge(active.get(field), submitted, definition.cardinality)
                    }
                    None => {
                        warn!(entity_type, bundle, field = %field, "Field has no definition, overwriting");
                        submitted.clone()
                    }
                }
            } else {
                submitted.clone()
            };
            debug!(field = %field, items = value.len(), "Setting field value");
            active.set(field.clone(), value);
        }

        if let Some(revision) = active.revision.as_mut() {
            revision.new_revision = true;
            revision.created_at = self.host.clock.now();
            revision.user_id = self.host.current_user.id();
            revision.log_message = Some(revision_log_message(values, &self.settings.revision_log_field));
        }

        self.host.storage.save(&active)?;
        info!(entity_type, bundle, id = %active.id, fields = values.len(), "Bulk edit applied");
        Ok(ExecuteOutcome::Modified)
    }
}

/// Revision log for a bulk edit of `values`.
///
/// A non-empty submitted `log_field` value wins; otherwise the message
/// names every configured field in order.
pub fn revision_log_message(values: &BundleValues, log_field: &str) -> String {
    if let Some(message) = values
        .get(log_field)
        .and_then(|v| v.first_str("value"))
        .filter(|m| !m.is_empty())
    {
        return message.to_string();
    }

    let fields = values.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
    if values.len() == 1 {
        format!("Edited as a part of bulk operation. Field changed: {fields}")
    } else {
        format!("Edited as a part of bulk operation. Fields changed: {fields}")
    }
}
