//! Pairing of an item with the fields that describe it, for presentation.

use std::fmt;

use crate::error::ActionError;
use crate::field::{Field, FieldValue};

/// Read-only pair of an item and its describing fields.
pub struct AssociatedItem<T> {
    item: T,
    fields: Vec<Field<T>>,
}

impl<T> AssociatedItem<T> {
    pub fn new(item: T, fields: Vec<Field<T>>) -> Self {
        Self { item, fields }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    /// One row per field: its name and the value extracted from the item.
    pub fn describe(&self) -> Vec<(&str, Result<FieldValue, ActionError>)> {
        self.fields
            .iter()
            .map(|f| (f.name(), f.get_from_item(&self.item)))
            .collect()
    }

    pub fn into_inner(self) -> (T, Vec<Field<T>>) {
        (self.item, self.fields)
    }
}

impl<T: fmt::Debug> fmt::Debug for AssociatedItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssociatedItem")
            .field("item", &self.item)
            .field("fields", &self.fields)
            .finish()
    }
}
