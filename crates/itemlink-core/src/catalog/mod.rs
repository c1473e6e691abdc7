//! Declarative catalogs of fields and actions for JSON items.
//!
//! A catalog is a TOML file with `[[fields]]` (JSON property lookups) and
//! `[[actions]]` (templates plus the field names they take). Loading builds
//! and validates every action up front, so a bad template fails when the
//! catalog is read rather than when an item is rendered.

mod parse;

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::action::ItemAction;
use crate::associated::AssociatedItem;
use crate::config::ItemlinkConfig;
use crate::field::Field;
use crate::params::ActionParams;
use crate::template::TemplateValidationError;

use parse::CatalogFile;

/// Item shape handled by catalogs.
pub type JsonItem = Value;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("field {name:?}: {source}")]
    InvalidField {
        name: String,
        #[source]
        source: TemplateValidationError,
    },
    #[error("action {action:?} references undeclared field {field:?}")]
    UnknownField { action: String, field: String },
    #[error("action {action:?}: {source}")]
    InvalidAction {
        action: String,
        #[source]
        source: TemplateValidationError,
    },
    #[error("duplicate action name {0:?}")]
    DuplicateAction(String),
}

/// Fields and validated actions declared by a catalog file.
#[derive(Debug, Clone)]
pub struct Catalog {
    fields: ActionParams<JsonItem>,
    actions: Vec<ItemAction<JsonItem>>,
}

impl Catalog {
    /// Parses a catalog, taking mode and encoding defaults from `cfg`.
    pub fn from_toml_str(data: &str, cfg: &ItemlinkConfig) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(data)?;

        let mut fields = Vec::with_capacity(file.fields.len());
        for decl in file.fields {
            let path = decl.path.as_deref().unwrap_or(&decl.name);
            let field = Field::property(decl.name.as_str(), path).map_err(|source| {
                CatalogError::InvalidField {
                    name: decl.name.clone(),
                    source,
                }
            })?;
            fields.push(match decl.default {
                Some(default) => field.with_default(default),
                None => field,
            });
        }
        let fields = ActionParams::new(fields).map_err(|source| CatalogError::InvalidField {
            name: duplicate_name(&source),
            source,
        })?;

        let mut seen = HashSet::new();
        let mut actions = Vec::with_capacity(file.actions.len());
        for decl in file.actions {
            if !seen.insert(decl.name.clone()) {
                return Err(CatalogError::DuplicateAction(decl.name));
            }

            let mut params = Vec::with_capacity(decl.params.len());
            for name in &decl.params {
                let field = fields.find(name).ok_or_else(|| CatalogError::UnknownField {
                    action: decl.name.clone(),
                    field: name.clone(),
                })?;
                params.push(field.clone());
            }

            let action = ActionParams::new(params)
                .and_then(|params| {
                    ItemAction::builder(decl.name.as_str(), decl.template, params)
                        .mode(decl.mode.unwrap_or(cfg.validation))
                        .encoding(decl.encoding.unwrap_or(cfg.encoding))
                        .build()
                })
                .map_err(|source| CatalogError::InvalidAction {
                    action: decl.name.clone(),
                    source,
                })?;
            actions.push(action);
        }

        tracing::debug!(
            fields = fields.len(),
            actions = actions.len(),
            "catalog loaded"
        );
        Ok(Self { fields, actions })
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path, cfg: &ItemlinkConfig) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read catalog {}", path.display()))?;
        Self::from_toml_str(&data, cfg).with_context(|| format!("load catalog {}", path.display()))
    }

    pub fn fields(&self) -> &ActionParams<JsonItem> {
        &self.fields
    }

    pub fn actions(&self) -> &[ItemAction<JsonItem>] {
        &self.actions
    }

    pub fn action(&self, name: &str) -> Option<&ItemAction<JsonItem>> {
        self.actions.iter().find(|a| a.name() == name)
    }

    /// Pairs `item` with every declared field.
    pub fn associate(&self, item: JsonItem) -> AssociatedItem<JsonItem> {
        AssociatedItem::new(item, self.fields.iter().cloned().collect())
    }
}

fn duplicate_name(err: &TemplateValidationError) -> String {
    match &err.kind {
        crate::template::ValidationErrorKind::DuplicateField { name } => name.clone(),
        _ => String::new(),
    }
}

/// Parses items from JSON text: either an array of items or a single item.
pub fn parse_items(data: &str) -> Result<Vec<JsonItem>, serde_json::Error> {
    match serde_json::from_str(data)? {
        Value::Array(items) => Ok(items),
        item => Ok(vec![item]),
    }
}

/// Reads items from a JSON file.
pub fn load_items(path: &Path) -> Result<Vec<JsonItem>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read items {}", path.display()))?;
    parse_items(&data).with_context(|| format!("parse items {}", path.display()))
}
