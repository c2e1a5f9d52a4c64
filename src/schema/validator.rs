//! Schema validator for inbound payloads
//!
//! Validation semantics:
//! - Every required field is present and non-null
//! - Optional fields may be absent or null
//! - Field types match exactly, no coercion
//! - Undeclared fields are ignored
//! - Every violation is reported, not just the first

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult, ValidationIssue};
use super::types::{FieldDef, FieldType, Schema};

/// Validates JSON documents against a single schema.
///
/// The validator never mutates the document and is deterministic.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a document.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Invalid` carrying every issue found.
    pub fn validate(&self, document: &Value) -> SchemaResult<()> {
        let issues = self.collect_issues(document);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Invalid {
                schema: self.schema.name.clone(),
                issues,
            })
        }
    }

    /// Returns every issue in the document, in field declaration order.
    pub fn collect_issues(&self, document: &Value) -> Vec<ValidationIssue> {
        match document.as_object() {
            Some(obj) => self.check_object(obj),
            None => vec![ValidationIssue::not_an_object(json_type_name(document))],
        }
    }

    fn check_object(&self, obj: &Map<String, Value>) -> Vec<ValidationIssue> {
        self.schema
            .fields
            .iter()
            .filter_map(|(name, def)| check_field(name, def, obj.get(name)))
            .collect()
    }
}

fn check_field(name: &str, def: &FieldDef, value: Option<&Value>) -> Option<ValidationIssue> {
    let expected = def.field_type.type_name();
    match value {
        None if def.required => Some(ValidationIssue::missing_field(name, expected)),
        Some(Value::Null) if def.required => Some(ValidationIssue::null_value(name, expected)),
        None | Some(Value::Null) => None,
        Some(value) if matches_type(value, def.field_type) => None,
        Some(value) => Some(ValidationIssue::type_mismatch(
            name,
            expected,
            json_type_name(value),
        )),
    }
}

fn matches_type(value: &Value, field_type: FieldType) -> bool {
    match field_type {
        FieldType::String => value.is_string(),
        FieldType::Int => value.is_i64(),
        FieldType::Bool => value.is_boolean(),
    }
}

/// Returns the JSON type name for issue messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "bigint",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
