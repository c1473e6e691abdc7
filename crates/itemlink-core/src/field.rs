//! Named, typed fields and the rules that extract them from items.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{ActionError, MissingValue};
use crate::template::{is_identifier, TemplateValidationError, ValidationErrorKind};

/// A typed value produced by a field extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Integer(n.into())
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Integer(n.into())
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// What a field does when its extractor finds nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPolicy {
    /// Fail with [`ActionError::MissingValue`].
    Required,
    /// Substitute `default`.
    Optional { default: FieldValue },
}

type Extractor<T> = Arc<dyn Fn(&T) -> Result<FieldValue, MissingValue> + Send + Sync>;

/// One named attribute of an item of type `T`.
///
/// The name must be an identifier (`[A-Za-z_][A-Za-z0-9_]*`) so that it can
/// appear as a `:name` placeholder. The missing-value policy is fixed at
/// construction: [`Field::new`] and [`Field::try_new`] build required fields,
/// [`Field::optional`] builds a field that falls back to a default.
pub struct Field<T> {
    name: String,
    policy: FieldPolicy,
    extractor: Extractor<T>,
}

impl<T: 'static> Field<T> {
    /// Required field whose extractor may report why a value is missing.
    pub fn try_new<F, V>(name: impl Into<String>, extractor: F) -> Result<Self, TemplateValidationError>
    where
        F: Fn(&T) -> Result<V, MissingValue> + Send + Sync + 'static,
        V: Into<FieldValue> + 'static,
    {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(ValidationErrorKind::InvalidFieldName { name }.into());
        }
        Ok(Self {
            name,
            policy: FieldPolicy::Required,
            extractor: Arc::new(move |item: &T| extractor(item).map(Into::<FieldValue>::into)),
        })
    }

    /// Required field; `None` from the extractor means the value is missing.
    pub fn new<F, V>(name: impl Into<String>, extractor: F) -> Result<Self, TemplateValidationError>
    where
        F: Fn(&T) -> Option<V> + Send + Sync + 'static,
        V: Into<FieldValue> + 'static,
    {
        Self::try_new(name, move |item| {
            extractor(item).ok_or_else(|| MissingValue::new("extractor returned no value"))
        })
    }

    /// Optional field that yields `default` when the extractor returns `None`.
    pub fn optional<F, V>(
        name: impl Into<String>,
        default: impl Into<FieldValue>,
        extractor: F,
    ) -> Result<Self, TemplateValidationError>
    where
        F: Fn(&T) -> Option<V> + Send + Sync + 'static,
        V: Into<FieldValue> + 'static,
    {
        Ok(Self::new(name, extractor)?.with_default(default))
    }
}

impl<T> Field<T> {
    /// Turns this field into an optional one with the given default.
    pub fn with_default(mut self, default: impl Into<FieldValue>) -> Self {
        self.policy = FieldPolicy::Optional {
            default: default.into(),
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> &FieldPolicy {
        &self.policy
    }

    pub fn is_optional(&self) -> bool {
        matches!(self.policy, FieldPolicy::Optional { .. })
    }

    /// Extracts this field's value from `item`, applying the missing-value policy.
    pub fn get_from_item(&self, item: &T) -> Result<FieldValue, ActionError> {
        match (self.extractor)(item) {
            Ok(value) => Ok(value),
            Err(missing) => match &self.policy {
                FieldPolicy::Required => Err(ActionError::MissingValue {
                    field: self.name.clone(),
                    reason: missing.reason,
                }),
                FieldPolicy::Optional { default } => {
                    tracing::trace!(field = %self.name, reason = %missing.reason, "using default");
                    Ok(default.clone())
                }
            },
        }
    }
}

impl Field<Value> {
    /// Field reading a scalar from a JSON item.
    ///
    /// `path` is a JSON pointer (`/owner/id`) or a plain top-level key (`id`).
    /// Null, arrays and objects count as missing.
    pub fn property(name: impl Into<String>, path: &str) -> Result<Self, TemplateValidationError> {
        let pointer = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path.replace('~', "~0").replace('/', "~1"))
        };
        Self::try_new(name, move |item: &Value| json_scalar(item.pointer(&pointer), &pointer))
    }
}

fn json_scalar(value: Option<&Value>, pointer: &str) -> Result<FieldValue, MissingValue> {
    match value {
        None | Some(Value::Null) => Err(MissingValue::new(format!("no value at {}", pointer))),
        Some(Value::String(s)) => Ok(FieldValue::Text(s.clone())),
        Some(Value::Bool(b)) => Ok(FieldValue::Bool(*b)),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(FieldValue::Integer(i))
            } else if n.is_u64() {
                Ok(FieldValue::Text(n.to_string()))
            } else {
                Ok(FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => Err(MissingValue::new(format!(
            "value at {} is not a scalar",
            pointer
        ))),
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            policy: self.policy.clone(),
            extractor: Arc::clone(&self.extractor),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Operation {
        id: u32,
        details: Option<String>,
    }

    #[test]
    fn extracts_typed_value() {
        let f = Field::new("id", |op: &Operation| Some(op.id)).unwrap();
        let op = Operation { id: 42, details: None };
        assert_eq!(f.get_from_item(&op).unwrap(), FieldValue::Integer(42));
        assert_eq!(f.get_from_item(&op).unwrap().to_string(), "42");
    }

    #[test]
    fn required_field_propagates_missing() {
        let f = Field::new("details", |op: &Operation| op.details.clone()).unwrap();
        let op = Operation { id: 1, details: None };
        let err = f.get_from_item(&op).unwrap_err();
        assert!(matches!(err, ActionError::MissingValue { ref field, .. } if field == "details"));
    }

    #[test]
    fn try_new_carries_reason() {
        let f = Field::try_new("details", |op: &Operation| {
            op.details.clone().ok_or_else(|| MissingValue::new("operation has no details"))
        })
        .unwrap();
        let err = f.get_from_item(&Operation { id: 1, details: None }).unwrap_err();
        assert_eq!(
            err,
            ActionError::MissingValue {
                field: "details".into(),
                reason: "operation has no details".into(),
            }
        );
    }

    #[test]
    fn optional_field_uses_default() {
        let f = Field::optional("details", "none", |op: &Operation| op.details.clone()).unwrap();
        assert!(f.is_optional());
        let op = Operation { id: 1, details: None };
        assert_eq!(f.get_from_item(&op).unwrap(), FieldValue::Text("none".into()));
    }

    #[test]
    fn rejects_non_identifier_names() {
        for bad in ["", "9id", "a-b", "with space"] {
            let err = Field::new(bad, |op: &Operation| Some(op.id)).unwrap_err();
            assert!(matches!(err.kind, ValidationErrorKind::InvalidFieldName { .. }), "{bad}");
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let f = Field::new("id", |op: &Operation| Some(op.id)).unwrap();
        let op = Operation { id: 9, details: None };
        assert_eq!(f.get_from_item(&op), f.get_from_item(&op));
    }

    #[test]
    fn property_reads_keys_and_pointers() {
        let item = json!({ "id": 7, "owner": { "name": "ana" }, "ratio": 0.5, "ok": true });
        let id = Field::property("id", "id").unwrap();
        let owner = Field::property("owner", "/owner/name").unwrap();
        let ratio = Field::property("ratio", "ratio").unwrap();
        let ok = Field::property("ok", "ok").unwrap();
        assert_eq!(id.get_from_item(&item).unwrap(), FieldValue::Integer(7));
        assert_eq!(owner.get_from_item(&item).unwrap(), FieldValue::Text("ana".into()));
        assert_eq!(ratio.get_from_item(&item).unwrap(), FieldValue::Float(0.5));
        assert_eq!(ok.get_from_item(&item).unwrap(), FieldValue::Bool(true));
    }

    #[test]
    fn property_treats_null_and_containers_as_missing() {
        let item = json!({ "a": null, "b": [1, 2], "c": {} });
        for key in ["a", "b", "c", "d"] {
            let f = Field::property(key, key).unwrap();
            assert!(f.get_from_item(&item).is_err(), "{key}");
        }
    }

    #[test]
    fn property_keeps_large_unsigned_exact() {
        let item = json!({ "big": u64::MAX });
        let f = Field::property("big", "big").unwrap();
        assert_eq!(f.get_from_item(&item).unwrap().to_string(), u64::MAX.to_string());
    }
}
