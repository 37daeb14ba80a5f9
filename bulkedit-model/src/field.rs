use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Field definitions of one bundle, keyed by field name.
pub type FieldDefinitions = IndexMap<String, FieldDefinition>;

/// Maximum number of items a field may hold.
///
/// Serialized as an integer where `-1` stands for unlimited, matching the
/// host's storage definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Cardinality {
    Limited(u32),
    Unlimited,
}

impl Cardinality {
    /// Sentinel used by the host for unlimited fields.
    pub const UNLIMITED: i64 = -1;

    /// A single-valued field.
    pub const fn single() -> Self {
        Self::Limited(1)
    }

    /// A field capped at `max` items; `max` must be at least one.
    pub fn limited(max: u32) -> crate::Result<Self> {
        if max == 0 {
            return Err(Error::InvalidCardinality(0));
        }
        Ok(Self::Limited(max))
    }

    /// True for unlimited fields and fields capped above one item.
    pub fn is_multiple(&self) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(max) => *max > 1,
        }
    }

    /// Item cap, or `None` when unlimited.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::Limited(max) => Some(*max as usize),
        }
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::single()
    }
}

impl TryFrom<i64> for Cardinality {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            Self::UNLIMITED => Ok(Self::Unlimited),
            n if n >= 1 && n <= i64::from(u32::MAX) => Ok(Self::Limited(n as u32)),
            n => Err(Error::InvalidCardinality(n)),
        }
    }
}

impl From<Cardinality> for i64 {
    fn from(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::Unlimited => Cardinality::UNLIMITED,
            Cardinality::Limited(max) => i64::from(max),
        }
    }
}

/// Display kind a field's widget configuration applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayContext {
    Form,
    View,
}

/// Host-provided description of a field on a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub cardinality: Cardinality,
    /// Display contexts in which site builders may configure the widget.
    #[serde(default)]
    pub configurable_displays: Vec<DisplayContext>,
}

impl FieldDefinition {
    /// A single-valued field configurable in both form and view displays.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            cardinality: Cardinality::single(),
            configurable_displays: vec![DisplayContext::Form, DisplayContext::View],
        }
    }

    #[must_use]
    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    /// Removes `context` from the configurable displays.
    #[must_use]
    pub fn locked_in(mut self, context: DisplayContext) -> Self {
        self.configurable_displays.retain(|c| *c != context);
        self
    }

    pub fn is_display_configurable(&self, context: DisplayContext) -> bool {
        self.configurable_displays.contains(&context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_from_sentinel() {
        assert_eq!(Cardinality::try_from(-1i64).unwrap(), Cardinality::Unlimited);
        assert_eq!(Cardinality::try_from(3i64).unwrap(), Cardinality::Limited(3));
        assert!(Cardinality::try_from(0i64).is_err());
        assert!(Cardinality::try_from(-7i64).is_err());
    }

    #[test]
    fn cardinality_multiple() {
        assert!(!Cardinality::single().is_multiple());
        assert!(Cardinality::Limited(2).is_multiple());
        assert!(Cardinality::Unlimited.is_multiple());
        assert_eq!(Cardinality::Unlimited.limit(), None);
        assert_eq!(Cardinality::Limited(4).limit(), Some(4));
    }

    #[test]
    fn locked_field_not_configurable() {
        let def = FieldDefinition::new("revision_log", "Revision log").locked_in(DisplayContext::Form);
        assert!(!def.is_display_configurable(DisplayContext::Form));
        assert!(def.is_display_configurable(DisplayContext::View));
    }
}
