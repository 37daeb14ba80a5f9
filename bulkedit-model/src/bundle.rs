use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A bundle present in the operator's selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BundleDescriptor {
    pub entity_type: String,
    pub bundle: String,
    /// Bundle label; empty when the entity type has no bundles.
    #[serde(default)]
    pub label: String,
}

impl BundleDescriptor {
    pub fn new(
        entity_type: impl Into<String>,
        bundle: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            bundle: bundle.into(),
            label: label.into(),
        }
    }
}

/// Host description of an entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTypeDefinition {
    pub id: String,
    pub label: String,
    /// Name of the property holding the bundle, e.g. `"type"` for nodes.
    pub bundle_key: String,
}

impl EntityTypeDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        bundle_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            bundle_key: bundle_key.into(),
        }
    }
}

/// Groups descriptors by entity type, keeping first-seen order for both
/// entity types and their bundles. Duplicate pairs are dropped.
pub fn group_by_entity_type(
    descriptors: &[BundleDescriptor],
) -> IndexMap<&str, Vec<&BundleDescriptor>> {
    let mut grouped: IndexMap<&str, Vec<&BundleDescriptor>> = IndexMap::new();
    for descriptor in descriptors {
        let bundles = grouped.entry(descriptor.entity_type.as_str()).or_default();
        if !bundles.iter().any(|b| b.bundle == descriptor.bundle) {
            bundles.push(descriptor);
        }
    }
    grouped
}
