//! Item actions: named reference templates resolved against an item.
//!
//! An [`ItemAction`] is validated once when it is built and can then be
//! resolved against any number of items. Resolution extracts every declared
//! field in order, encodes the values, and renders the parsed template behind
//! the `#` fragment marker.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ActionError;
use crate::params::ActionParams;
use crate::template::{Template, TemplateValidationError, ValidationErrorKind, ValueEncoding};

/// Prefix marking a resolved reference as a local fragment.
pub const FRAGMENT_MARKER: char = '#';

/// How strictly a template is checked against its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Unknown placeholders, unused fields and `:<digit>` fail construction.
    #[default]
    Strict,
    /// Unknown placeholders are left in the output as written.
    Lenient,
}

/// A named, parameterized reference template.
pub struct ItemAction<T> {
    name: String,
    template: Template,
    params: ActionParams<T>,
    mode: ValidationMode,
    encoding: ValueEncoding,
}

/// Builder for [`ItemAction`] with non-default mode or encoding.
pub struct ItemActionBuilder<T> {
    name: String,
    template: String,
    params: ActionParams<T>,
    mode: ValidationMode,
    encoding: ValueEncoding,
}

impl<T> ItemActionBuilder<T> {
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn encoding(mut self, encoding: ValueEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn build(self) -> Result<ItemAction<T>, TemplateValidationError> {
        let template = Template::parse(self.template);
        validate(&self.name, &template, &self.params, self.mode)?;
        tracing::debug!(
            action = %self.name,
            template = template.source(),
            mode = ?self.mode,
            "built item action"
        );
        Ok(ItemAction {
            name: self.name,
            template,
            params: self.params,
            mode: self.mode,
            encoding: self.encoding,
        })
    }
}

fn validate<T>(
    action: &str,
    template: &Template,
    params: &ActionParams<T>,
    mode: ValidationMode,
) -> Result<(), TemplateValidationError> {
    let unknown = template
        .placeholders()
        .into_iter()
        .find(|name| params.find(name).is_none());

    if mode == ValidationMode::Lenient {
        if let Some(name) = unknown {
            tracing::warn!(action, placeholder = name, "placeholder has no field; left unresolved");
        }
        return Ok(());
    }

    if let Some(&position) = template.malformed_positions().first() {
        return Err(ValidationErrorKind::MalformedPlaceholder { position }.into());
    }
    if let Some(name) = unknown {
        return Err(ValidationErrorKind::UnknownPlaceholder {
            name: name.to_string(),
        }
        .into());
    }
    if let Some(field) = params.iter().find(|f| !template.references(f.name())) {
        return Err(ValidationErrorKind::UnusedField {
            name: field.name().to_string(),
        }
        .into());
    }
    Ok(())
}

impl<T> ItemAction<T> {
    /// Builds a strict action with percent-encoded values.
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        params: ActionParams<T>,
    ) -> Result<Self, TemplateValidationError> {
        Self::builder(name, template, params).build()
    }

    pub fn builder(
        name: impl Into<String>,
        template: impl Into<String>,
        params: ActionParams<T>,
    ) -> ItemActionBuilder<T> {
        ItemActionBuilder {
            name: name.into(),
            template: template.into(),
            params,
            mode: ValidationMode::default(),
            encoding: ValueEncoding::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &str {
        self.template.source()
    }

    pub fn params(&self) -> &ActionParams<T> {
        &self.params
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn encoding(&self) -> ValueEncoding {
        self.encoding
    }

    pub fn placeholders(&self) -> Vec<&str> {
        self.template.placeholders()
    }

    /// Resolves the template against `item`, returning `#` followed by the
    /// substituted text.
    ///
    /// Fails with [`ActionError::MissingValue`] if a required field has no
    /// value; nothing is substituted with an empty string.
    pub fn resolve(&self, item: &T) -> Result<String, ActionError> {
        let mut values: HashMap<&str, String> = HashMap::with_capacity(self.params.len());
        for field in &self.params {
            let value = field.get_from_item(item)?.to_string();
            values.insert(field.name(), self.encoding.apply(&value).into_owned());
        }

        let mut out = String::with_capacity(self.template.source().len() + 1);
        out.push(FRAGMENT_MARKER);
        self.template
            .render_into(&mut out, |name| values.get(name).map(String::as_str));

        tracing::debug!(action = %self.name, reference = %out, "resolved item action");
        Ok(out)
    }
}

/// Resolves each action against `item`, keeping failures per action so the
/// caller can omit them from display.
pub fn resolve_all<'a, T>(
    item: &T,
    actions: &'a [ItemAction<T>],
) -> Vec<(&'a str, Result<String, ActionError>)> {
    actions
        .iter()
        .map(|action| (action.name(), action.resolve(item)))
        .collect()
}

impl<T> Clone for ItemAction<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            template: self.template.clone(),
            params: self.params.clone(),
            mode: self.mode,
            encoding: self.encoding,
        }
    }
}

impl<T> fmt::Debug for ItemAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemAction")
            .field("name", &self.name)
            .field("template", &self.template.source())
            .field("params", &self.params)
            .field("mode", &self.mode)
            .field("encoding", &self.encoding)
            .finish()
    }
}
