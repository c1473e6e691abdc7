//! Ordered parameter sets for action templates.

use std::collections::HashSet;
use std::fmt;

use crate::field::Field;
use crate::template::{TemplateValidationError, ValidationErrorKind};

/// The fields an action template may reference, in declaration order.
///
/// Names are unique within a set.
pub struct ActionParams<T> {
    fields: Vec<Field<T>>,
}

impl<T> ActionParams<T> {
    pub fn new(fields: Vec<Field<T>>) -> Result<Self, TemplateValidationError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(ValidationErrorKind::DuplicateField {
                    name: field.name().to_string(),
                }
                .into());
            }
        }
        Ok(Self { fields })
    }

    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field<T>> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(Field::name)
    }

    pub fn find(&self, name: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a ActionParams<T> {
    type Item = &'a Field<T>;
    type IntoIter = std::slice::Iter<'a, Field<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<T> Clone for ActionParams<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T> fmt::Debug for ActionParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
