//! Form tree handling for the bulk-edit action.
//!
//! The host renders each bundle's edit widgets into a [`FormNode`] tree.
//! This crate finds the real input control inside each field's widget
//! ([`find_form_element`]), builds the per-bundle opt-in checkboxes
//! ([`SelectorBuilder`]) and reads the operator's choices back out of the
//! submitted [`FormState`].

mod element;
mod locator;
mod node;
mod selector;
mod state;

pub use element::{FormElement, NodePath};
pub use locator::{Located, find_form_element, locate_mut};
pub use node::{FormNode, VisibilityRule};
pub use selector::{FIELD_SELECTOR_KEY, SelectorBuilder, SelectorEntry, SelectorGroup};
pub use state::{FormState, is_truthy};
