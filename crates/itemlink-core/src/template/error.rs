//! Error types for template and field wiring validation.

use thiserror::Error;

/// Raised when an action, its fields, or its template are wired inconsistently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template validation failed: {kind}")]
pub struct TemplateValidationError {
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// Template references `:name` but no field with that name is declared.
    #[error("placeholder :{name} has no matching field")]
    UnknownPlaceholder { name: String },
    /// A declared field never appears in the template.
    #[error("field {name:?} is not referenced by the template")]
    UnusedField { name: String },
    /// `:` immediately followed by a digit.
    #[error("malformed placeholder at byte {position}")]
    MalformedPlaceholder { position: usize },
    /// Two fields in one parameter set share a name.
    #[error("duplicate field name {name:?}")]
    DuplicateField { name: String },
    /// Field name is empty or not an identifier.
    #[error("invalid field name {name:?} (expected [A-Za-z_][A-Za-z0-9_]*)")]
    InvalidFieldName { name: String },
}

impl From<ValidationErrorKind> for TemplateValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self { kind }
    }
}
