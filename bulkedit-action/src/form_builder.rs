//! Renders the bulk-edit dialog and captures its submission.

use bulkedit_form::{FIELD_SELECTOR_KEY, FormNode, FormState, SelectorBuilder, SelectorGroup};
use bulkedit_model::{BundleDescriptor, EditConfiguration, group_by_entity_type};
use tracing::{debug, info, warn};

use crate::{BulkEditSettings, Host, Result};

/// Key of the options fieldset.
pub const OPTIONS_KEY: &str = "options";

/// Key of the "add values to multi-value fields" checkbox.
pub const ADD_VALUES_KEY: &str = "_add_values";

pub struct FormBuilder {
    host: Host,
    settings: BulkEditSettings,
}

impl FormBuilder {
    pub fn new(host: Host, settings: BulkEditSettings) -> Self {
        Self { host, settings }
    }

    /// Adds the options and one edit form per selected bundle to `form`.
    ///
    /// The bundles are remembered in `state` for
    /// [`submit_configuration`](Self::submit_configuration).
    pub fn build_form(
        &self,
        mut form: FormNode,
        state: &mut FormState,
        bundles: &[BundleDescriptor],
    ) -> Result<FormNode> {
        state.disable_cache();
        state.bundle_data = bundles.to_vec();

        form.classes.push("views-bulk-edit-form".to_string());
        form.insert_child(
            OPTIONS_KEY,
            FormNode::of_kind("fieldset")
                .with_title(&self.settings.options_title)
                .with_child(
                    ADD_VALUES_KEY,
                    FormNode::of_kind("checkbox")
                        .with_title(&self.settings.add_values_title)
                        .with_description(&self.settings.add_values_description),
                ),
        );

        let grouped = group_by_entity_type(bundles);
        let bundle_count: usize = grouped.values().map(Vec::len).sum();
        for descriptor in grouped.values().flatten() {
            self.add_bundle_form(descriptor, &mut form, state, bundle_count)?;
        }

        info!(bundles = bundle_count, "Built bulk edit form");
        Ok(form)
    }

    fn add_bundle_form(
        &self,
        descriptor: &BundleDescriptor,
        form: &mut FormNode,
        state: &FormState,
        bundle_count: usize,
    ) -> Result<()> {
        let entity_type = descriptor.entity_type.as_str();
        let bundle = descriptor.bundle.as_str();

        let definition = self.host.entity_types.definition(entity_type)?;
        let record = self.host.storage.create(entity_type, &definition.bundle_key, bundle)?;

        // Without a bundle label the entity type has no bundles.
        let bundle_label = if descriptor.label.is_empty() {
            definition.label.as_str()
        } else {
            descriptor.label.as_str()
        };
        let mut bundle_form =
            FormNode::of_kind("details").with_title(format!("{} - {}", definition.label, bundle_label));
        bundle_form.open = Some(bundle_count == 1);
        bundle_form.parents = Some(vec![entity_type.to_string(), bundle.to_string()]);

        let display = self.host.forms.collect_display(&record, &self.settings.surface)?;
        display.build_form(&record, &mut bundle_form, state)?;

        // A rebuilt dialog keeps the boxes ticked in the submitted state.
        let mut selector = self.selector_form(entity_type, bundle, &mut bundle_form)?;
        selector.tick(&state.selected_fields(entity_type, bundle));
        bundle_form
            .children
            .entry(FIELD_SELECTOR_KEY.to_string())
            .or_insert_with(|| selector.into_node());

        form.children
            .entry(entity_type.to_string())
            .or_insert_with(|| FormNode::of_kind("container").with_tree(true))
            .children
            .insert(bundle.to_string(), bundle_form);
        Ok(())
    }

    /// Builds the field selector for a rendered bundle form, patching the
    /// form's controls in place.
    pub fn selector_form(
        &self,
        entity_type: &str,
        bundle: &str,
        form: &mut FormNode,
    ) -> Result<SelectorGroup> {
        let definitions = self.host.fields.field_definitions(entity_type, bundle)?;
        let group = SelectorBuilder::new(entity_type, bundle)
            .with_titles(&self.settings.selector_title, &self.settings.empty_selector_title)
            .with_weight(self.settings.selector_weight)
            .with_display_context(self.settings.display_context)
            .build(form, &definitions);
        Ok(group)
    }

    /// Captures the values of every selected field into a new configuration.
    ///
    /// Bundles without a ticked checkbox contribute nothing.
    pub fn submit_configuration(&self, form: &FormNode, state: &FormState) -> Result<EditConfiguration> {
        let mut config = EditConfiguration::new();

        for descriptor in group_by_entity_type(&state.bundle_data).values().flatten() {
            let entity_type = descriptor.entity_type.as_str();
            let bundle = descriptor.bundle.as_str();

            let selected = state.selected_fields(entity_type, bundle);
            if selected.is_empty() {
                debug!(entity_type, bundle, "No fields selected");
                continue;
            }

            let mut bundle_form = form
                .children
                .get(entity_type)
                .and_then(|t| t.children.get(bundle))
                .cloned()
                .unwrap_or_default();

            let mut offered = bundle_form
                .children
                .get(FIELD_SELECTOR_KEY)
                .map(SelectorGroup::from_node)
                .unwrap_or_default();
            for field in offered.tick(&selected) {
                warn!(entity_type, bundle, field, "Ignoring ticked field the selector does not offer");
            }
            let selected: Vec<String> = offered.enabled_keys().map(str::to_string).collect();
            if selected.is_empty() {
                debug!(entity_type, bundle, "No offered fields selected");
                continue;
            }

            let definition = self.host.entity_types.definition(entity_type)?;
            let mut record = self.host.storage.create(entity_type, &definition.bundle_key, bundle)?;
            bundle_form.parents = Some(vec![entity_type.to_string(), bundle.to_string()]);

            let display = self.host.forms.collect_display(&record, &self.settings.surface)?;
            display.extract_form_values(&mut record, &bundle_form, state)?;

            for field in selected {
                let value = record.get(&field).cloned().unwrap_or_default();
                debug!(entity_type, bundle, field = %field, items = value.len(), "Captured field value");
                config.set_field(entity_type, bundle, field, value);
            }
        }

        config.add_values = state.add_values();
        Ok(config)
    }
}
