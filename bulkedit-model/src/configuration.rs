use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::FieldValue;

/// Values to write into one bundle, in the order the fields were configured.
pub type BundleValues = IndexMap<String, FieldValue>;

/// Persisted action configuration produced by a bulk-edit submission.
///
/// Replayed once per selected record during batch execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditConfiguration {
    /// Append to multi-value fields instead of overwriting them.
    #[serde(rename = "_add_values", default)]
    pub add_values: bool,
    /// entity type → bundle → field → value.
    #[serde(default)]
    bundles: IndexMap<String, IndexMap<String, BundleValues>>,
}

impl EditConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the value to write into `field` for the given bundle.
    pub fn set_field(
        &mut self,
        entity_type: impl Into<String>,
        bundle: impl Into<String>,
        field: impl Into<String>,
        value: FieldValue,
    ) {
        self.bundles
            .entry(entity_type.into())
            .or_default()
            .entry(bundle.into())
            .or_default()
            .insert(field.into(), value);
    }

    /// Values configured for an exact (entity type, bundle) pair.
    pub fn bundle_values(&self, entity_type: &str, bundle: &str) -> Option<&BundleValues> {
        self.bundles.get(entity_type)?.get(bundle)
    }

    /// Iterates `(entity type, bundle, values)` in configuration order.
    pub fn bundles(&self) -> impl Iterator<Item = (&str, &str, &BundleValues)> {
        self.bundles.iter().flat_map(|(entity_type, bundles)| {
            bundles
                .iter()
                .map(move |(bundle, values)| (entity_type.as_str(), bundle.as_str(), values))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.values().all(|b| b.values().all(|v| v.is_empty()))
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
