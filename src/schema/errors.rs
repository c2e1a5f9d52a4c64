//! Schema error types
//!
//! A rejected payload carries one `ValidationIssue` per violated field
//! constraint. Issues serialize in the shape the site's frontend consumes:
//! `{code, expected, received, path, message}`.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Issue classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Value missing, null, or of the wrong JSON type
    InvalidType,
    /// Request body is not parseable JSON
    InvalidBody,
}

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    /// Expected type name
    pub expected: String,
    /// Received type name (`undefined` when the field is absent)
    pub received: String,
    /// Path to the offending value; empty for the document root
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    /// Required field absent from the payload
    pub fn missing_field(field: impl Into<String>, expected: &str) -> Self {
        Self {
            code: IssueCode::InvalidType,
            expected: expected.into(),
            received: "undefined".into(),
            path: vec![field.into()],
            message: "Required".into(),
        }
    }

    /// Required field explicitly set to null
    pub fn null_value(field: impl Into<String>, expected: &str) -> Self {
        Self {
            code: IssueCode::InvalidType,
            expected: expected.into(),
            received: "null".into(),
            path: vec![field.into()],
            message: "Required".into(),
        }
    }

    /// Value present with the wrong type
    pub fn type_mismatch(field: impl Into<String>, expected: &str, received: &str) -> Self {
        Self {
            code: IssueCode::InvalidType,
            expected: expected.into(),
            received: received.into(),
            path: vec![field.into()],
            message: format!("Expected {}, received {}", expected, received),
        }
    }

    /// Payload root is not a JSON object
    pub fn not_an_object(received: &str) -> Self {
        Self {
            code: IssueCode::InvalidType,
            expected: "object".into(),
            received: received.into(),
            path: Vec::new(),
            message: format!("Expected object, received {}", received),
        }
    }

    /// Request body could not be read as JSON
    pub fn invalid_body(detail: impl Into<String>) -> Self {
        Self {
            code: IssueCode::InvalidBody,
            expected: "object".into(),
            received: "unreadable body".into(),
            path: Vec::new(),
            message: detail.into(),
        }
    }

    /// Dotted rendering of the path, `$root` for the document itself
    pub fn field(&self) -> String {
        if self.path.is_empty() {
            "$root".to_string()
        } else {
            self.path.join(".")
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {}", self.field(), self.message)
    }
}

/// Schema errors
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Payload violates its schema
    #[error("{schema} payload failed validation: {}", summarize(.issues))]
    Invalid {
        schema: String,
        issues: Vec<ValidationIssue>,
    },

    /// Validated payload could not be decoded into its typed form
    #[error("{schema} payload could not be decoded: {source}")]
    Decode {
        schema: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    /// Issues for an `Invalid` error, empty otherwise
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            SchemaError::Invalid { issues, .. } => issues,
            SchemaError::Decode { .. } => &[],
        }
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
