//! Startup seed data
//!
//! The listing endpoints have no write route, so their content comes from a
//! JSON file read once at startup:
//!
//! ```json
//! { "portfolio": [ {...}, ... ], "testimonials": [ {...}, ... ] }
//! ```
//!
//! Every entry is validated against its insert schema before anything is
//! stored. One bad entry rejects the whole file and leaves the store
//! untouched.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::schema::{InsertPayload, InsertPortfolioItem, InsertTestimonial, SchemaError};
use crate::storage::Storage;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{section}[{index}]: {source}")]
    Entry {
        section: &'static str,
        index: usize,
        #[source]
        source: SchemaError,
    },
}

/// Raw seed document, entries not yet validated
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    #[serde(default)]
    pub portfolio: Vec<Value>,
    #[serde(default)]
    pub testimonials: Vec<Value>,
}

/// Counts of records created from a seed file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub portfolio_items: usize,
    pub testimonials: usize,
}

/// Validated seed content, ready to insert
#[derive(Debug)]
pub struct SeedData {
    portfolio: Vec<InsertPortfolioItem>,
    testimonials: Vec<InsertTestimonial>,
}

impl SeedFile {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Validates every entry.
    pub fn validate(self) -> Result<SeedData, SeedError> {
        Ok(SeedData {
            portfolio: parse_section("portfolio", self.portfolio)?,
            testimonials: parse_section("testimonials", self.testimonials)?,
        })
    }
}

impl SeedData {
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            portfolio_items: self.portfolio.len(),
            testimonials: self.testimonials.len(),
        }
    }

    /// Inserts everything in file order.
    pub fn apply(self, storage: &dyn Storage) -> SeedSummary {
        let summary = self.summary();
        for item in self.portfolio {
            storage.create_portfolio_item(item);
        }
        for testimonial in self.testimonials {
            storage.create_testimonial(testimonial);
        }
        summary
    }
}

fn parse_section<T: InsertPayload>(
    section: &'static str,
    entries: Vec<Value>,
) -> Result<Vec<T>, SeedError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            T::parse(entry).map_err(|source| SeedError::Entry {
                section,
                index,
                source,
            })
        })
        .collect()
}

/// Loads, validates and applies a seed file.
pub fn load_and_apply(path: &Path, storage: &dyn Storage) -> Result<SeedSummary, SeedError> {
    let data = SeedFile::load(path)?.validate()?;
    Ok(data.apply(storage))
}
