//! TOML structures for catalog files.

use serde::Deserialize;

use crate::action::ValidationMode;
use crate::field::FieldValue;
use crate::template::ValueEncoding;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub actions: Vec<ActionDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,
    /// JSON pointer or top-level key; defaults to `name`.
    #[serde(default)]
    pub path: Option<String>,
    /// Presence makes the field optional.
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionDecl {
    pub name: String,
    pub template: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub mode: Option<ValidationMode>,
    #[serde(default)]
    pub encoding: Option<ValueEncoding>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<DefaultValue> for FieldValue {
    fn from(v: DefaultValue) -> Self {
        match v {
            DefaultValue::Bool(b) => FieldValue::Bool(b),
            DefaultValue::Integer(n) => FieldValue::Integer(n),
            DefaultValue::Float(x) => FieldValue::Float(x),
            DefaultValue::Text(s) => FieldValue::Text(s),
        }
    }
}
