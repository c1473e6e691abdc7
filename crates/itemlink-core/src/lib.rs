pub mod config;
pub mod logging;

pub mod action;
pub mod associated;
pub mod catalog;
pub mod digest;
pub mod error;
pub mod field;
pub mod params;
pub mod template;

pub use action::{resolve_all, ItemAction, ItemActionBuilder, ValidationMode, FRAGMENT_MARKER};
pub use associated::AssociatedItem;
pub use error::{ActionError, MissingValue};
pub use field::{Field, FieldPolicy, FieldValue};
pub use params::ActionParams;
pub use template::{TemplateValidationError, ValidationErrorKind, ValueEncoding};
