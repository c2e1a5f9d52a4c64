//! Storage Invariant Tests
//!
//! - Ids are exactly 1..=N in call order, per collection
//! - Lookups return exactly what create returned
//! - Unknown keys are absent, never an error
//! - Listings are insertion-ordered snapshots
//! - Concurrent creates never share an id

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use chrono::Utc;
use showcase::schema::{
    InsertContactMessage, InsertPortfolioItem, InsertTestimonial, InsertUser,
};
use showcase::storage::{MemStorage, Storage};

// =============================================================================
// Helper Functions
// =============================================================================

fn ada() -> InsertContactMessage {
    InsertContactMessage {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        project_type: "branding".into(),
        budget: None,
        timeline: None,
        message: "Hello".into(),
        newsletter: None,
    }
}

fn portfolio_item(title: &str) -> InsertPortfolioItem {
    InsertPortfolioItem {
        title: title.into(),
        description: "Short film".into(),
        category: "video".into(),
        image_url: format!("/img/{}.jpg", title),
        video_url: None,
        views: None,
        featured: Some(true),
    }
}

fn testimonial(name: &str, rating: i64) -> InsertTestimonial {
    InsertTestimonial {
        name: name.into(),
        company: "Acme".into(),
        review: "Fast and sharp".into(),
        rating,
        project_type: "video".into(),
        initials: name[..1].to_string(),
    }
}

fn user(username: &str) -> InsertUser {
    InsertUser {
        username: username.into(),
        password: "secret".into(),
    }
}

// =============================================================================
// Identity Assignment
// =============================================================================

#[test]
fn test_ids_are_sequential_from_one() {
    let storage = MemStorage::new();
    let ids: Vec<_> = (0..25)
        .map(|i| storage.create_testimonial(testimonial("Sam", i % 5)).id)
        .collect();

    let expected: Vec<_> = (1..=25).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_identical_payloads_get_distinct_ids() {
    let storage = MemStorage::new();
    let first = storage.create_contact_message(ada());
    let second = storage.create_contact_message(ada());

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(storage.get_contact_messages().len(), 2);
}

#[test]
fn test_concurrent_creates_never_share_an_id() {
    let storage = Arc::new(MemStorage::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let storage = Arc::clone(&storage);
            thread::spawn(move || {
                (0..50)
                    .map(|_| storage.create_contact_message(ada()).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "id {} issued twice", id);
        }
    }

    let expected: BTreeSet<_> = (1..=400).collect();
    assert_eq!(ids, expected);
}

// =============================================================================
// Contact Messages
// =============================================================================

#[test]
fn test_contact_message_server_fields() {
    let storage = MemStorage::new();
    let start = Utc::now();

    let msg = storage.create_contact_message(ada());

    assert_eq!(msg.id, 1);
    assert_eq!(msg.budget, None);
    assert!(!msg.newsletter);
    assert!(msg.created_at >= start);
    assert!(msg.created_at <= Utc::now());
}

#[test]
fn test_contact_message_listing_preserves_created_at() {
    let storage = MemStorage::new();
    let created = storage.create_contact_message(ada());

    let listed = storage.get_contact_messages();
    assert_eq!(listed, vec![created]);
}

// =============================================================================
// Portfolio and Testimonials
// =============================================================================

#[test]
fn test_two_portfolio_items_in_creation_order() {
    let storage = MemStorage::new();
    let first = storage.create_portfolio_item(portfolio_item("alpha"));
    let second = storage.create_portfolio_item(portfolio_item("beta"));

    assert_eq!(second.id, 2);
    assert_eq!(storage.get_portfolio_items(), vec![first, second]);
}

#[test]
fn test_listing_is_a_snapshot() {
    let storage = MemStorage::new();
    storage.create_testimonial(testimonial("Ann", 5));

    let mut listed = storage.get_testimonials();
    listed[0].rating = 1;
    listed.push(listed[0].clone());

    let fresh = storage.get_testimonials();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].rating, 5);
}

#[test]
fn test_listing_not_sorted_by_business_fields() {
    let storage = MemStorage::new();
    storage.create_testimonial(testimonial("Zed", 2));
    storage.create_testimonial(testimonial("Amy", 5));

    let names: Vec<_> = storage
        .get_testimonials()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Zed", "Amy"]);
}

#[test]
fn test_collections_are_independent() {
    let storage = MemStorage::new();
    storage.create_portfolio_item(portfolio_item("alpha"));
    storage.create_portfolio_item(portfolio_item("beta"));

    assert_eq!(storage.create_testimonial(testimonial("Ann", 4)).id, 1);
    assert_eq!(storage.create_contact_message(ada()).id, 1);
    assert_eq!(storage.create_user(user("ann")).id, 1);
}

// =============================================================================
// Users
// =============================================================================

#[test]
fn test_get_user_returns_created_record() {
    let storage = MemStorage::new();
    let created = storage.create_user(user("grace"));

    assert_eq!(storage.get_user(created.id), Some(created));
}

#[test]
fn test_get_user_unknown_id_is_absent() {
    let storage = MemStorage::new();
    assert_eq!(storage.get_user(1), None);

    storage.create_user(user("grace"));
    assert_eq!(storage.get_user(2), None);
    assert_eq!(storage.get_user(0), None);
}

#[test]
fn test_username_lookup_on_fresh_store() {
    let storage = MemStorage::new();
    assert_eq!(storage.get_user_by_username("nobody"), None);
}

#[test]
fn test_username_lookup_finds_match() {
    let storage = MemStorage::new();
    storage.create_user(user("ada"));
    let grace = storage.create_user(user("grace"));

    assert_eq!(storage.get_user_by_username("grace"), Some(grace));
    assert_eq!(storage.get_user_by_username("nobody"), None);
}

#[test]
fn test_storage_usable_as_trait_object() {
    let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
    storage.create_portfolio_item(portfolio_item("alpha"));

    let stats = storage.stats();
    assert_eq!(stats.portfolio_items, 1);
    assert_eq!(stats.testimonials, 0);
}
