//! Data model shared by the bulk-edit crates.
//!
//! Everything here is plain data handed back and forth with the host
//! content framework:
//! - [`Record`] — one content item of a given entity type and bundle
//! - [`FieldValue`] — the ordered item list stored in a single field
//! - [`FieldDefinition`] / [`Cardinality`] — what the host says about a field
//! - [`BundleDescriptor`] — a selected (entity type, bundle) pair
//! - [`EditConfiguration`] — the persisted result of a bulk-edit submission

mod bundle;
mod configuration;
mod field;
mod record;

pub use bundle::{BundleDescriptor, EntityTypeDefinition, group_by_entity_type};
pub use configuration::{BundleValues, EditConfiguration};
pub use field::{Cardinality, DisplayContext, FieldDefinition, FieldDefinitions};
pub use record::{FieldValue, Record, RevisionState};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or decoding model values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid cardinality: {0}")]
    InvalidCardinality(i64),
}
