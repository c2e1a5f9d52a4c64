//! In-memory storage backend

use chrono::Utc;
use serde::Serialize;

use crate::schema::{
    ContactMessage, EntityId, InsertContactMessage, InsertPortfolioItem, InsertTestimonial,
    InsertUser, PortfolioItem, Testimonial, User,
};

use super::collection::Collection;
use super::Storage;

/// Record counts per collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    pub users: usize,
    pub contact_messages: usize,
    pub portfolio_items: usize,
    pub testimonials: usize,
}

/// Process-lifetime store holding one collection per entity type.
///
/// Nothing survives a restart.
#[derive(Default)]
pub struct MemStorage {
    users: Collection<User>,
    contact_messages: Collection<ContactMessage>,
    portfolio_items: Collection<PortfolioItem>,
    testimonials: Collection<Testimonial>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemStorage {
    fn stats(&self) -> StorageStats {
        StorageStats {
            users: self.users.len(),
            contact_messages: self.contact_messages.len(),
            portfolio_items: self.portfolio_items.len(),
            testimonials: self.testimonials.len(),
        }
    }

    fn get_user(&self, id: EntityId) -> Option<User> {
        self.users.get(id)
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.username == username)
    }

    fn create_user(&self, user: InsertUser) -> User {
        self.users.insert_with(|id| User::new(id, user))
    }

    fn create_contact_message(&self, message: InsertContactMessage) -> ContactMessage {
        self.contact_messages.insert_with(|id| ContactMessage::new(id, message, Utc::now()))
    }

    fn get_contact_messages(&self) -> Vec<ContactMessage> {
        self.contact_messages.all()
    }

    fn get_portfolio_items(&self) -> Vec<PortfolioItem> {
        self.portfolio_items.all()
    }

    fn create_portfolio_item(&self, item: InsertPortfolioItem) -> PortfolioItem {
        self.portfolio_items.insert_with(|id| PortfolioItem::new(id, item))
    }

    fn get_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.all()
    }

    fn create_testimonial(&self, testimonial: InsertTestimonial) -> Testimonial {
        self.testimonials.insert_with(|id| Testimonial::new(id, testimonial))
    }
}
