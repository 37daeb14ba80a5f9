use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The ordered list of items held by one field of a record.
///
/// Item shape depends on the field type and is interpreted by the host
/// only; a text field typically holds `[{"value": "..."}]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Vec<Value>);

impl FieldValue {
    #[must_use]
    pub fn new(items: Vec<Value>) -> Self {
        Self(items)
    }

    /// A value holding exactly one item.
    #[must_use]
    pub fn single(item: Value) -> Self {
        Self(vec![item])
    }

    pub fn items(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, item: Value) {
        self.0.push(item);
    }

    /// String property of the first item, e.g. `first_str("value")`.
    pub fn first_str(&self, property: &str) -> Option<&str> {
        self.0.first()?.get(property)?.as_str()
    }
}

impl From<Vec<Value>> for FieldValue {
    fn from(items: Vec<Value>) -> Self {
        Self(items)
    }
}

impl FromIterator<Value> for FieldValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Revision bookkeeping for entity types that keep a revision log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionState {
    /// Whether the next save creates a new revision.
    pub new_revision: bool,
    /// Revision creation time, seconds since Unix epoch.
    pub created_at: i64,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_message: Option<String>,
}

/// A content item as handed out by host storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub entity_type: String,
    pub bundle: String,
    #[serde(default)]
    pub fields: IndexMap<String, FieldValue>,
    /// `None` when the entity type does not support revisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<RevisionState>,
}

impl Record {
    /// A blank, unsaved record of the given bundle.
    pub fn new(entity_type: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            entity_type: entity_type.into(),
            bundle: bundle.into(),
            fields: IndexMap::new(),
            revision: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Marks the record as belonging to a revisionable entity type.
    #[must_use]
    pub fn with_revisions(mut self) -> Self {
        self.revision.get_or_insert_with(RevisionState::default);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: FieldValue) {
        self.fields.insert(field.into(), value);
    }

    pub fn is_revisionable(&self) -> bool {
        self.revision.is_some()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}
