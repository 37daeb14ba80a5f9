use bulkedit_model::BundleDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::FIELD_SELECTOR_KEY;

/// Submission state carried between rendering and submitting the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    /// Submitted values, nested by form parents.
    #[serde(default)]
    pub values: Value,
    /// Bundles the form was rendered for.
    #[serde(default)]
    pub bundle_data: Vec<BundleDescriptor>,
    /// Set when the form must not be served from the form cache.
    #[serde(default)]
    pub cache_disabled: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_values(mut self, values: Value) -> Self {
        self.values = values;
        self
    }

    pub fn disable_cache(&mut self) {
        self.cache_disabled = true;
    }

    /// Submitted value at `parents`, if every level exists.
    pub fn value_at(&self, parents: &[&str]) -> Option<&Value> {
        parents.iter().try_fold(&self.values, |value, key| value.get(*key))
    }

    /// Fields whose selector checkbox was ticked for a bundle, in
    /// submission order. A missing or malformed selector means none.
    pub fn selected_fields(&self, entity_type: &str, bundle: &str) -> Vec<String> {
        let Some(Value::Object(selector)) =
            self.value_at(&[entity_type, bundle, FIELD_SELECTOR_KEY])
        else {
            return Vec::new();
        };
        selector
            .iter()
            .filter(|(_, ticked)| is_truthy(ticked))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Whether "add values to multi-value fields" was ticked.
    pub fn add_values(&self) -> bool {
        self.values.get("_add_values").is_some_and(is_truthy)
    }
}

/// Loose truthiness of a submitted value: `false`, `0`, `""`, `"0"`, null
/// and empty collections are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
