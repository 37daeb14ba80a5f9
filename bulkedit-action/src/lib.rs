//! Bulk-edit action for a content framework.
//!
//! Given a selection of records spanning several entity types and bundles,
//! the action:
//! 1. renders one edit form per bundle with an opt-in checkbox per field
//!    ([`FormBuilder::build_form`]),
//! 2. captures the opted-in values into a persisted [`EditConfiguration`]
//!    ([`FormBuilder::submit_configuration`]),
//! 3. replays that configuration onto each selected record, appending to
//!    multi-value fields when asked, and records a revision
//!    ([`Executor::execute`]).
//!
//! Everything the host framework owns (entity storage, field definitions,
//! widget rendering, clock, current user) is reached through the traits in
//! [`host`].
//!
//! [`EditConfiguration`]: bulkedit_model::EditConfiguration

mod action;
mod error;
mod executor;
mod form_builder;
pub mod host;
mod merge;
mod settings;

pub use action::EditAction;
pub use error::{BulkEditError, HostError, HostResult, Result};
pub use executor::{ExecuteOutcome, Executor, revision_log_message};
pub use form_builder::{ADD_VALUES_KEY, FormBuilder, OPTIONS_KEY};
pub use host::Host;
pub use merge::ValueMerger;
pub use settings::BulkEditSettings;
