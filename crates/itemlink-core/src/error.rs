//! Errors raised while extracting field values and resolving actions.

use thiserror::Error;

use crate::template::TemplateValidationError;

/// Signal returned by an extractor when the item does not carry the data.
///
/// The owning [`Field`](crate::Field) turns this into
/// [`ActionError::MissingValue`] or into its default, depending on its policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct MissingValue {
    pub reason: String,
}

impl MissingValue {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Error returned by field extraction and action resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A required field could not produce a value from the item.
    #[error("field {field:?} has no value: {reason}")]
    MissingValue { field: String, reason: String },

    /// The action was wired with a template that does not match its fields.
    #[error(transparent)]
    TemplateValidation(#[from] TemplateValidationError),
}
