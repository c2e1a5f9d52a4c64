//! Insert payloads
//!
//! Each payload pairs a typed struct with the schema its JSON form is
//! validated against. Server-assigned fields (`id`, `createdAt`) are not
//! part of any payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldDef, Schema};
use super::validator::SchemaValidator;

/// A payload type that can be validated and decoded from JSON.
pub trait InsertPayload: DeserializeOwned {
    /// Entity name used in schemas and error messages
    const ENTITY: &'static str;

    /// Declared field constraints for this payload
    fn schema() -> Schema;

    /// Validates `document` and decodes it into the typed payload.
    ///
    /// # Errors
    ///
    /// `SchemaError::Invalid` lists every violated constraint.
    /// `SchemaError::Decode` means the document passed validation but
    /// still could not be decoded.
    fn parse(document: Value) -> SchemaResult<Self> {
        let schema = Self::schema();
        SchemaValidator::new(&schema).validate(&document)?;
        serde_json::from_value(document).map_err(|source| SchemaError::Decode {
            schema: schema.name,
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

impl InsertPayload for InsertUser {
    const ENTITY: &'static str = "user";

    fn schema() -> Schema {
        Schema::new(Self::ENTITY)
            .field("username", FieldDef::required_string())
            .field("password", FieldDef::required_string())
    }
}

/// Contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    pub message: String,
    /// Defaults to `false` when absent
    #[serde(default)]
    pub newsletter: Option<bool>,
}

impl InsertPayload for InsertContactMessage {
    const ENTITY: &'static str = "contact_message";

    fn schema() -> Schema {
        Schema::new(Self::ENTITY)
            .field("firstName", FieldDef::required_string())
            .field("lastName", FieldDef::required_string())
            .field("email", FieldDef::required_string())
            .field("projectType", FieldDef::required_string())
            .field("budget", FieldDef::optional_string())
            .field("timeline", FieldDef::optional_string())
            .field("message", FieldDef::required_string())
            .field("newsletter", FieldDef::optional_bool())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPortfolioItem {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Display string such as "2.4M"
    #[serde(default)]
    pub views: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl InsertPayload for InsertPortfolioItem {
    const ENTITY: &'static str = "portfolio_item";

    fn schema() -> Schema {
        Schema::new(Self::ENTITY)
            .field("title", FieldDef::required_string())
            .field("description", FieldDef::required_string())
            .field("category", FieldDef::required_string())
            .field("imageUrl", FieldDef::required_string())
            .field("videoUrl", FieldDef::optional_string())
            .field("views", FieldDef::optional_string())
            .field("featured", FieldDef::optional_bool())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTestimonial {
    pub name: String,
    pub company: String,
    pub review: String,
    pub rating: i64,
    pub project_type: String,
    pub initials: String,
}

impl InsertPayload for InsertTestimonial {
    const ENTITY: &'static str = "testimonial";

    fn schema() -> Schema {
        Schema::new(Self::ENTITY)
            .field("name", FieldDef::required_string())
            .field("company", FieldDef::required_string())
            .field("review", FieldDef::required_string())
            .field("rating", FieldDef::required_int())
            .field("projectType", FieldDef::required_string())
            .field("initials", FieldDef::required_string())
    }
}
