//! Storage engine
//!
//! Holds the authoritative in-memory collections for each entity type and
//! assigns identities. Transport concerns live elsewhere.
//!
//! # Contract
//!
//! - Ids are positive, sequential per collection, starting at 1, never reused
//! - `create_*` never validates and never fails; payloads arrive validated
//! - Lookups return `None` for unknown keys, never an error
//! - Listings are owned snapshots in insertion order
//! - Id assignment plus insertion is atomic per collection

mod collection;
mod memory;

pub use collection::{Collection, FIRST_ID};
pub use memory::{MemStorage, StorageStats};

use crate::schema::{
    ContactMessage, EntityId, InsertContactMessage, InsertPortfolioItem, InsertTestimonial,
    InsertUser, PortfolioItem, Testimonial, User,
};

/// Storage seam used by the HTTP layer.
pub trait Storage: Send + Sync {
    fn get_user(&self, id: EntityId) -> Option<User>;

    /// Linear scan. Uniqueness of usernames is the caller's responsibility.
    fn get_user_by_username(&self, username: &str) -> Option<User>;

    fn create_user(&self, user: InsertUser) -> User;

    /// Stamps `createdAt` with the current time.
    fn create_contact_message(&self, message: InsertContactMessage) -> ContactMessage;

    fn get_contact_messages(&self) -> Vec<ContactMessage>;

    fn get_portfolio_items(&self) -> Vec<PortfolioItem>;

    fn create_portfolio_item(&self, item: InsertPortfolioItem) -> PortfolioItem;

    fn get_testimonials(&self) -> Vec<Testimonial>;

    fn create_testimonial(&self, testimonial: InsertTestimonial) -> Testimonial;

    /// Record counts per collection
    fn stats(&self) -> StorageStats;
}
