//! Per-bundle "select fields to change" checkboxes.

use bulkedit_model::{DisplayContext, FieldDefinitions};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::locator::find_form_element;
use crate::{FormNode, VisibilityRule};

/// Reserved child key holding the selector checkboxes of a bundle form.
pub const FIELD_SELECTOR_KEY: &str = "_field_selector";

/// One opt-in checkbox, keyed like the field it toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorEntry {
    pub key: String,
    pub title: String,
    pub weight: i32,
    pub enabled: bool,
}

/// The checkbox group built for one bundle form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorGroup {
    pub title: String,
    pub weight: i32,
    entries: IndexMap<String, SelectorEntry>,
}

impl SelectorGroup {
    pub fn entries(&self) -> impl Iterator<Item = &SelectorEntry> {
        self.entries.values()
    }

    pub fn get(&self, key: &str) -> Option<&SelectorEntry> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a rendered selector fieldset back into a group. Only checkbox
    /// children count as entries.
    pub fn from_node(node: &FormNode) -> Self {
        let entries = node
            .children
            .iter()
            .filter(|(_, child)| child.kind.as_deref() == Some("checkbox"))
            .map(|(key, child)| {
                let entry = SelectorEntry {
                    key: key.clone(),
                    title: child.title.clone().unwrap_or_default(),
                    weight: child.weight.unwrap_or_default(),
                    enabled: child.value.as_deref() == Some("1"),
                };
                (key.clone(), entry)
            })
            .collect();
        Self {
            title: node.title.clone().unwrap_or_default(),
            weight: node.weight.unwrap_or_default(),
            entries,
        }
    }

    /// Ticks exactly the offered entries named in `selected` and returns the
    /// names the group does not offer.
    pub fn tick<'a>(&mut self, selected: &'a [String]) -> Vec<&'a str> {
        for entry in self.entries.values_mut() {
            entry.enabled = selected.contains(&entry.key);
        }
        selected
            .iter()
            .map(String::as_str)
            .filter(|key| !self.entries.contains_key(*key))
            .collect()
    }

    /// Keys of the ticked entries, in form order.
    pub fn enabled_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().filter(|e| e.enabled).map(|e| e.key.as_str())
    }

    /// Renders the group as a fieldset of checkboxes.
    pub fn into_node(self) -> FormNode {
        let mut fieldset = FormNode::of_kind("fieldset")
            .with_title(self.title)
            .with_weight(self.weight)
            .with_tree(true)
            .with_class("vbe-selector-fieldset");
        for (key, entry) in self.entries {
            let mut checkbox = FormNode::of_kind("checkbox")
                .with_title(entry.title)
                .with_weight(entry.weight)
                .with_tree(true);
            if entry.enabled {
                checkbox.value = Some("1".to_string());
            }
            fieldset.children.insert(key, checkbox);
        }
        fieldset
    }
}

/// Builds the selector group for a bundle form and wires each offered
/// field's visibility to its checkbox.
#[derive(Debug, Clone)]
pub struct SelectorBuilder {
    entity_type: String,
    bundle: String,
    context: DisplayContext,
    title: String,
    empty_title: String,
    weight: i32,
}

impl SelectorBuilder {
    pub fn new(entity_type: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            bundle: bundle.into(),
            context: DisplayContext::Form,
            title: "Select fields to change".to_string(),
            empty_title: "There are no fields available to modify".to_string(),
            weight: -50,
        }
    }

    /// Overrides the group title and the title shown when nothing is offered.
    #[must_use]
    pub fn with_titles(mut self, title: impl Into<String>, empty_title: impl Into<String>) -> Self {
        self.title = title.into();
        self.empty_title = empty_title.into();
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_display_context(mut self, context: DisplayContext) -> Self {
        self.context = context;
        self
    }

    /// Walks the direct children of `form` and offers one checkbox per
    /// configurable field.
    ///
    /// Fields without a control are skipped. Fields the host does not let
    /// site builders configure (or does not define at all) get their control
    /// hidden. Offered controls lose their `required` flag and submit as a
    /// tree, and their wrapper becomes visible only while the checkbox is
    /// ticked.
    pub fn build(&self, form: &mut FormNode, definitions: &FieldDefinitions) -> SelectorGroup {
        let mut entries = IndexMap::new();

        for (key, wrapper) in form.children.iter_mut() {
            if key == FIELD_SELECTOR_KEY || !wrapper.is_accessible() {
                continue;
            }
            let Some(located) = find_form_element(&*wrapper, None) else {
                debug!(field = %key, "No input control in widget, skipping");
                continue;
            };
            let wrapper_weight = wrapper.weight;
            let Some(control) = located.resolve(&mut *wrapper) else {
                continue;
            };

            let configurable = definitions
                .get(key)
                .is_some_and(|d| d.is_display_configurable(self.context));
            if !configurable {
                debug!(field = %key, "Field not configurable for bulk edit, hiding");
                control.access = Some(false);
                continue;
            }

            control.required = Some(false);
            control.tree = Some(true);
            let entry = SelectorEntry {
                key: key.clone(),
                title: control.title.clone().unwrap_or_default(),
                weight: wrapper_weight.or(control.weight).unwrap_or(0),
                enabled: false,
            };
            entries.insert(key.clone(), entry);

            wrapper.visible_when = Some(VisibilityRule::field_selector(
                &self.entity_type,
                &self.bundle,
                key,
            ));
        }

        let title = if entries.is_empty() {
            self.empty_title.clone()
        } else {
            self.title.clone()
        };
        debug!(
            entity_type = %self.entity_type,
            bundle = %self.bundle,
            offered = entries.len(),
            "Built field selector"
        );

        SelectorGroup {
            title,
            weight: self.weight,
            entries,
        }
    }
}
