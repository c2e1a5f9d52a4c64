//! Stored records
//!
//! Each record is built from its validated insert payload plus the fields
//! the server assigns. Records serialize with camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::payloads::{InsertContactMessage, InsertPortfolioItem, InsertTestimonial, InsertUser};

/// Primary key type shared by every collection. Ids start at 1.
pub type EntityId = u32;

/// Any stored record with a server-assigned id
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> EntityId;
}

/// Site user, reserved for a future login flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    /// Never serialized
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub fn new(id: EntityId, payload: InsertUser) -> Self {
        Self {
            id,
            username: payload.username,
            password: payload.password,
        }
    }
}

/// Contact form submission as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    pub message: String,
    pub newsletter: bool,
    /// Submission time, fixed at creation
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(id: EntityId, payload: InsertContactMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            project_type: payload.project_type,
            budget: payload.budget,
            timeline: payload.timeline,
            message: payload.message,
            newsletter: payload.newsletter.unwrap_or(false),
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
    pub featured: bool,
}

impl PortfolioItem {
    pub fn new(id: EntityId, payload: InsertPortfolioItem) -> Self {
        Self {
            id,
            title: payload.title,
            description: payload.description,
            category: payload.category,
            image_url: payload.image_url,
            video_url: payload.video_url,
            views: payload.views,
            featured: payload.featured.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: EntityId,
    pub name: String,
    pub company: String,
    pub review: String,
    pub rating: i64,
    pub project_type: String,
    pub initials: String,
}

impl Testimonial {
    pub fn new(id: EntityId, payload: InsertTestimonial) -> Self {
        Self {
            id,
            name: payload.name,
            company: payload.company,
            review: payload.review,
            rating: payload.rating,
            project_type: payload.project_type,
            initials: payload.initials,
        }
    }
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> EntityId {
                    self.id
                }
            }
        )+
    };
}

impl_record!(User, ContactMessage, PortfolioItem, Testimonial);

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_payload() -> InsertContactMessage {
        InsertContactMessage {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            project_type: "branding".into(),
            budget: None,
            timeline: Some("Q3".into()),
            message: "Hello".into(),
            newsletter: None,
        }
    }

    #[test]
    fn test_contact_message_defaults_newsletter_false() {
        let msg = ContactMessage::new(1, contact_payload(), Utc::now());
        assert!(!msg.newsletter);
    }

    #[test]
    fn test_contact_message_json_shape() {
        let msg = ContactMessage::new(3, contact_payload(), Utc::now());
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["timeline"], "Q3");
        assert_eq!(json["newsletter"], false);
        assert!(json.get("budget").is_none());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_user_password_not_serialized() {
        let user = User::new(
            1,
            InsertUser {
                username: "admin".into(),
                password: "hunter2".into(),
            },
        );
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("admin"));
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_portfolio_item_featured_default() {
        let item = PortfolioItem::new(
            2,
            InsertPortfolioItem {
                title: "Reel".into(),
                description: "Showreel".into(),
                category: "video".into(),
                image_url: "/reel.jpg".into(),
                video_url: None,
                views: Some("1.2M".into()),
                featured: None,
            },
        );
        assert_eq!(item.id(), 2);
        assert!(!item.featured);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["imageUrl"], "/reel.jpg");
        assert_eq!(json["views"], "1.2M");
    }
}
