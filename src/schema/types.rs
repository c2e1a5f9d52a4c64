//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - bool: Boolean

use serde::{Deserialize, Serialize};

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
}

impl FieldType {
    /// Returns the type name reported in validation issues
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "integer",
            FieldType::Bool => "boolean",
        }
    }
}

/// Field definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether field must be present and non-null
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
        }
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: false,
        }
    }

    /// Create a required int field
    pub fn required_int() -> Self {
        Self {
            field_type: FieldType::Int,
            required: true,
        }
    }

    /// Create an optional bool field
    pub fn optional_bool() -> Self {
        Self {
            field_type: FieldType::Bool,
            required: false,
        }
    }
}

/// Insert-payload schema for one entity.
///
/// Fields keep their declaration order so that validation issues are
/// reported in the same order the entity declares them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Entity name, e.g. `contact_message`
    pub name: String,
    /// Field definitions in declaration order
    pub fields: Vec<(String, FieldDef)>,
}

impl Schema {
    /// Create an empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field, replacing any earlier declaration with the same name
    pub fn field(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = def,
            None => self.fields.push((name, def)),
        }
        self
    }
}
