//! Schema definitions for the site's entities
//!
//! Every inbound payload is validated against its declared schema before it
//! reaches storage. Storage never re-validates.
//!
//! # Design Principles
//!
//! - Declared field constraints only (required/optional, type)
//! - No implicit coercion
//! - All violations reported together, one issue per field
//! - Server-assigned fields never come from the caller

mod errors;
mod payloads;
mod records;
mod types;
mod validator;

pub use errors::{IssueCode, SchemaError, SchemaResult, ValidationIssue};
pub use payloads::{
    InsertContactMessage, InsertPayload, InsertPortfolioItem, InsertTestimonial, InsertUser,
};
pub use records::{ContactMessage, EntityId, PortfolioItem, Record, Testimonial, User};
pub use types::{FieldDef, FieldType, Schema};
pub use validator::SchemaValidator;
