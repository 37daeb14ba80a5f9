use bulkedit_model::{Cardinality, FieldValue};

/// Decides the value written into a field: the submitted value outright,
/// or the current items followed by as many submitted items as the field's
/// cardinality still allows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueMerger {
    append: bool,
}

impl ValueMerger {
    pub fn new(append: bool) -> Self {
        Self { append }
    }

    pub fn is_append(&self) -> bool {
        self.append
    }

    /// Value to set on a field holding `current`.
    ///
    /// Appending only applies to multi-value fields; single-value fields are
    /// always overwritten.
    pub fn merge(
        &self,
        current: Option<&FieldValue>,
        submitted: &FieldValue,
        cardinality: Cardinality,
    ) -> FieldValue {
        if !self.append || !cardinality.is_multiple() {
            return submitted.clone();
        }

        let mut merged = current.cloned().unwrap_or_default();
        let limit = cardinality.limit();
        for item in submitted.items() {
            if limit.is_some_and(|max| merged.len() >= max) {
                break;
            }
            merged.push(item.clone());
        }
        merged
    }
}
