//! In-memory host used by the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use bulkedit_action::host::{
    Clock, CurrentUser, EntityStorage, EntityTypeRegistry, FieldDefinitionRegistry, FormDisplay,
    FormRenderer,
};
use bulkedit_action::{Host, HostError, HostResult};
use bulkedit_form::{FormNode, FormState};
use bulkedit_model::{
    Cardinality, DisplayContext, EntityTypeDefinition, FieldDefinition, FieldDefinitions,
    FieldValue, Record,
};
use indexmap::IndexMap;
use serde_json::{Value, json};

pub const NOW: i64 = 1_700_000_000;
pub const USER_ID: &str = "7";

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
pub struct MemoryHost {
    entity_types: IndexMap<String, EntityTypeDefinition>,
    revisionable: HashSet<String>,
    fields: IndexMap<(String, String), FieldDefinitions>,
    records: Mutex<IndexMap<(String, String), Record>>,
    saved: Mutex<Vec<Record>>,
    failing_saves: Mutex<HashSet<String>>,
}

impl MemoryHost {
    /// Nodes with "page" and "article" bundles plus an unrevisioned
    /// "contact_message" type without bundles.
    pub fn with_content_types() -> Self {
        let mut host = Self::default();
        host.add_entity_type(EntityTypeDefinition::new("node", "Content", "type"), true);
        host.add_entity_type(
            EntityTypeDefinition::new("contact_message", "Contact message", "contact_form"),
            false,
        );

        let node_fields = || {
            vec![
                FieldDefinition::new("title", "Title"),
                FieldDefinition::new("body", "Body"),
                FieldDefinition::new("tags", "Tags").with_cardinality(Cardinality::Unlimited),
                FieldDefinition::new("images", "Images").with_cardinality(Cardinality::Limited(3)),
                FieldDefinition::new("revision_log", "Revision log message")
                    .locked_in(DisplayContext::Form),
            ]
        };
        host.add_fields("node", "page", node_fields());
        host.add_fields("node", "article", node_fields());
        host.add_fields(
            "contact_message",
            "contact_message",
            vec![FieldDefinition::new("message", "Message")],
        );
        host
    }

    pub fn add_entity_type(&mut self, definition: EntityTypeDefinition, revisionable: bool) {
        if revisionable {
            self.revisionable.insert(definition.id.clone());
        }
        self.entity_types.insert(definition.id.clone(), definition);
    }

    pub fn add_fields(&mut self, entity_type: &str, bundle: &str, fields: Vec<FieldDefinition>) {
        let definitions = fields.into_iter().map(|d| (d.name.clone(), d)).collect();
        self.fields
            .insert((entity_type.to_string(), bundle.to_string()), definitions);
    }

    /// Stores a record as the active revision.
    pub fn insert(&self, record: Record) {
        let key = (record.entity_type.clone(), record.id.clone());
        self.records.lock().unwrap().insert(key, record);
    }

    /// Stores a revisionable node with a title and no tags.
    pub fn insert_node(&self, id: &str, bundle: &str, title: &str) -> Record {
        let mut record = Record::new("node", bundle)
            .with_id(id)
            .with_field("title", text(title))
            .with_revisions();
        record.set("tags", FieldValue::default());
        self.insert(record.clone());
        record
    }

    pub fn get(&self, entity_type: &str, id: &str) -> Record {
        self.records.lock().unwrap()[&(entity_type.to_string(), id.to_string())].clone()
    }

    pub fn saved(&self) -> Vec<Record> {
        self.saved.lock().unwrap().clone()
    }

    pub fn fail_saves_for(&self, id: &str) {
        self.failing_saves.lock().unwrap().insert(id.to_string());
    }

    pub fn into_host(self) -> (Arc<MemoryHost>, Host) {
        let memory = Arc::new(self);
        let host = Host {
            entity_types: memory.clone(),
            storage: memory.clone(),
            fields: memory.clone(),
            forms: memory.clone(),
            clock: Arc::new(FixedClock(NOW)),
            current_user: Arc::new(StaticUser(USER_ID.to_string())),
        };
        (memory, host)
    }

    fn definitions(&self, entity_type: &str, bundle: &str) -> FieldDefinitions {
        self.fields
            .get(&(entity_type.to_string(), bundle.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl EntityTypeRegistry for MemoryHost {
    fn definition(&self, entity_type: &str) -> HostResult<EntityTypeDefinition> {
        self.entity_types
            .get(entity_type)
            .cloned()
            .ok_or_else(|| HostError::UnknownEntityType(entity_type.to_string()))
    }
}

impl EntityStorage for MemoryHost {
    fn create(&self, entity_type: &str, _bundle_key: &str, bundle: &str) -> HostResult<Record> {
        let record = Record::new(entity_type, bundle);
        Ok(if self.revisionable.contains(entity_type) {
            record.with_revisions()
        } else {
            record
        })
    }

    fn load_active(&self, entity_type: &str, id: &str) -> HostResult<Record> {
        self.records
            .lock()
            .unwrap()
            .get(&(entity_type.to_string(), id.to_string()))
            .cloned()
            .ok_or_else(|| HostError::NotFound {
                entity_type: entity_type.to_string(),
                id: id.to_string(),
            })
    }

    fn save(&self, record: &Record) -> HostResult<()> {
        if self.failing_saves.lock().unwrap().contains(&record.id) {
            return Err(HostError::Storage(format!("write failed for {}", record.id)));
        }
        self.saved.lock().unwrap().push(record.clone());
        self.insert(record.clone());
        Ok(())
    }
}

impl FieldDefinitionRegistry for MemoryHost {
    fn field_definitions(&self, entity_type: &str, bundle: &str) -> HostResult<FieldDefinitions> {
        Ok(self.definitions(entity_type, bundle))
    }
}

impl FormRenderer for MemoryHost {
    fn collect_display(&self, record: &Record, _surface: &str) -> HostResult<Box<dyn FormDisplay + '_>> {
        Ok(Box::new(WidgetDisplay {
            definitions: self.definitions(&record.entity_type, &record.bundle),
        }))
    }
}

/// Renders every field as wrapper → widget → delta → `value` input.
pub struct WidgetDisplay {
    definitions: FieldDefinitions,
}

impl FormDisplay for WidgetDisplay {
    fn build_form(&self, _record: &Record, form: &mut FormNode, _state: &FormState) -> HostResult<()> {
        for (weight, (name, definition)) in self.definitions.iter().enumerate() {
            let input = FormNode::of_kind("textfield")
                .with_title(&definition.label)
                .with_required(name == "title");
            let wrapper = FormNode::group().with_weight(weight as i32).with_child(
                "widget",
                FormNode::group().with_child("0", FormNode::group().with_child("value", input)),
            );
            form.insert_child(name.clone(), wrapper);
        }
        Ok(())
    }

    fn extract_form_values(
        &self,
        record: &mut Record,
        form: &FormNode,
        state: &FormState,
    ) -> HostResult<()> {
        let parents = form
            .parents
            .clone()
            .ok_or_else(|| HostError::Form("form has no parents".to_string()))?;
        for name in self.definitions.keys() {
            let mut path: Vec<&str> = parents.iter().map(String::as_str).collect();
            path.push(name.as_str());
            if let Some(Value::Array(items)) = state.value_at(&path) {
                record.set(name.clone(), FieldValue::new(items.clone()));
            }
        }
        Ok(())
    }
}

pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

pub struct StaticUser(pub String);

impl CurrentUser for StaticUser {
    fn id(&self) -> String {
        self.0.clone()
    }
}

pub fn text(value: &str) -> FieldValue {
    FieldValue::single(json!({"value": value}))
}

pub fn targets(ids: &[u32]) -> FieldValue {
    ids.iter().map(|id| json!({"target_id": id})).collect()
}
