//! Collaborators supplied by the host content framework.

use std::sync::Arc;

use bulkedit_form::{FormNode, FormState};
use bulkedit_model::{EntityTypeDefinition, FieldDefinitions, Record};

use crate::HostResult;

pub trait EntityTypeRegistry: Send + Sync {
    fn definition(&self, entity_type: &str) -> HostResult<EntityTypeDefinition>;
}

/// Record persistence with revision support.
pub trait EntityStorage: Send + Sync {
    /// A blank, unsaved record whose `bundle_key` property is `bundle`.
    fn create(&self, entity_type: &str, bundle_key: &str, bundle: &str) -> HostResult<Record>;

    /// The latest editable revision of a record (draft if one exists).
    fn load_active(&self, entity_type: &str, id: &str) -> HostResult<Record>;

    fn save(&self, record: &Record) -> HostResult<()>;
}

pub trait FieldDefinitionRegistry: Send + Sync {
    fn field_definitions(&self, entity_type: &str, bundle: &str) -> HostResult<FieldDefinitions>;
}

/// Resolves the widget display used to render a record on a surface.
pub trait FormRenderer: Send + Sync {
    fn collect_display(&self, record: &Record, surface: &str) -> HostResult<Box<dyn FormDisplay + '_>>;
}

/// Widget display for one bundle and surface.
pub trait FormDisplay {
    /// Renders the record's field widgets as children of `form`.
    fn build_form(&self, record: &Record, form: &mut FormNode, state: &FormState) -> HostResult<()>;

    /// Copies submitted widget values under `form.parents` onto the record.
    fn extract_form_values(
        &self,
        record: &mut Record,
        form: &FormNode,
        state: &FormState,
    ) -> HostResult<()>;
}

pub trait Clock: Send + Sync {
    /// Seconds since Unix epoch.
    fn now(&self) -> i64;
}

pub trait CurrentUser: Send + Sync {
    fn id(&self) -> String;
}

/// Wall clock backed by `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// The set of host services the action runs against.
#[derive(Clone)]
pub struct Host {
    pub entity_types: Arc<dyn EntityTypeRegistry>,
    pub storage: Arc<dyn EntityStorage>,
    pub fields: Arc<dyn FieldDefinitionRegistry>,
    pub forms: Arc<dyn FormRenderer>,
    pub clock: Arc<dyn Clock>,
    pub current_user: Arc<dyn CurrentUser>,
}
