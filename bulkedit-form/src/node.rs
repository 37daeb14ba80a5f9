use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::FormElement;
use crate::selector::FIELD_SELECTOR_KEY;

/// Client-side rule showing a node only while a checkbox is ticked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityRule {
    /// Element selector of the controlling checkbox.
    pub selector: String,
    pub checked: bool,
}

impl VisibilityRule {
    /// Visible while the matching field-selector checkbox is ticked.
    pub fn field_selector(entity_type: &str, bundle: &str, field: &str) -> Self {
        Self {
            selector: format!(
                "[name=\"{entity_type}[{bundle}][{FIELD_SELECTOR_KEY}][{field}]\"]"
            ),
            checked: true,
        }
    }
}

/// One node of a render/form tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// `Some(false)` hides the node and its subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Submit values nested under the node's parents instead of flattened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_when: Option<VisibilityRule>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, FormNode>,
}

impl FormNode {
    /// A grouping level without a control kind.
    pub fn group() -> Self {
        Self::default()
    }

    /// A node of the given control kind.
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub fn with_access(mut self, access: bool) -> Self {
        self.access = Some(access);
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn with_tree(mut self, tree: bool) -> Self {
        self.tree = Some(tree);
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, key: impl Into<String>, child: FormNode) -> Self {
        self.children.insert(key.into(), child);
        self
    }

    pub fn insert_child(&mut self, key: impl Into<String>, child: FormNode) -> &mut FormNode {
        let key = key.into();
        self.children.insert(key.clone(), child);
        &mut self.children[key.as_str()]
    }

    /// False only when access was explicitly denied.
    pub fn is_accessible(&self) -> bool {
        self.access != Some(false)
    }
}

impl FormElement for FormNode {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn children(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn child(&self, key: &str) -> Option<&Self> {
        self.children.get(key)
    }

    fn child_mut(&mut self, key: &str) -> Option<&mut Self> {
        self.children.get_mut(key)
    }
}
