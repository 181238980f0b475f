//! In-memory storage backends.
//!
//! Process-local implementations of the storage traits, used by the server
//! and by tests. Data does not survive a restart.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

use crate::models::{BlogPost, ContactMessage, MessageStatus, NewMessage};
use crate::{MessageStore, PostStore, StorageError};

/// In-memory contact message store.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    messages: RwLock<Vec<ContactMessage>>,
}

impl MemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn insert_message(&self, submission: NewMessage) -> Result<ContactMessage, StorageError> {
        let message = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            status: MessageStatus::New,
            created_at: Utc::now(),
        };
        let mut messages = self
            .messages
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        messages.push(message.clone());
        log::info!("Stored contact message {} from {}", message.id, message.email);
        Ok(message)
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>, StorageError> {
        let messages = self.messages.read().unwrap_or_else(PoisonError::into_inner);
        let mut listed = messages.clone();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn update_status(
        &self,
        id: &str,
        status: MessageStatus,
    ) -> Result<ContactMessage, StorageError> {
        let mut messages = self
            .messages
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })?;
        message.status = status;
        Ok(message.clone())
    }

    async fn delete_message(&self, id: &str) -> Result<(), StorageError> {
        let mut messages = self
            .messages
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return Err(StorageError::NotFound { id: id.to_string() });
        }
        Ok(())
    }
}

/// In-memory blog post store, pre-populated with the directory's published
/// posts.
#[derive(Debug)]
pub struct MemoryPostStore {
    posts: Vec<BlogPost>,
}

impl MemoryPostStore {
    /// Creates a store holding the given posts.
    #[must_use]
    pub const fn new(posts: Vec<BlogPost>) -> Self {
        Self { posts }
    }

    /// Creates a store with the directory's standing editorial posts.
    #[must_use]
    pub fn with_seed_posts() -> Self {
        Self::new(seed_posts())
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, StorageError> {
        let mut listed = self.posts.clone();
        listed.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(listed)
    }
}

/// The standing editorial posts shipped with the directory.
fn seed_posts() -> Vec<BlogPost> {
    let date = |y, m, d| {
        Utc.with_ymd_and_hms(y, m, d, 9, 0, 0)
            .single()
            .expect("valid seed date")
    };
    vec![
        BlogPost {
            id: "post-1".to_string(),
            title: "How We Rate Community Safety".to_string(),
            excerpt: "A look at the signals behind every safety rating in the directory."
                .to_string(),
            content: "Safety ratings combine reported incident counts, trend direction, \
                      and resident feedback into a single 0-5 score. This post walks \
                      through each signal and how often it is refreshed."
                .to_string(),
            author: "Kavya Nair".to_string(),
            published_at: date(2025, 6, 12),
            category: "Safety".to_string(),
            image_url:
                "https://images.pexels.com/photos/1115804/pexels-photo-1115804.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
            read_time: 6,
            views: 1840,
        },
        BlogPost {
            id: "post-2".to_string(),
            title: "Choosing Between Metro and Bus Corridors".to_string(),
            excerpt: "What transport connectivity scores actually measure.".to_string(),
            content: "The 0-10 transport score weighs metro access, bus frequency, and \
                      last-mile options. Here is how to read it when comparing two \
                      communities in the same city."
                .to_string(),
            author: "Arjun Gupta".to_string(),
            published_at: date(2025, 7, 3),
            category: "Connectivity".to_string(),
            image_url:
                "https://images.pexels.com/photos/2102587/pexels-photo-2102587.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
            read_time: 4,
            views: 960,
        },
        BlogPost {
            id: "post-3".to_string(),
            title: "Verified Listings, Explained".to_string(),
            excerpt: "What the verification badge does and does not tell you.".to_string(),
            content: "Verification confirms the property manager and contact details, \
                      independent of any rating. A high-rated listing can be unverified \
                      and a verified one can rate poorly."
                .to_string(),
            author: "Meera Joshi".to_string(),
            published_at: date(2025, 5, 21),
            category: "Directory".to_string(),
            image_url:
                "https://images.pexels.com/photos/3288100/pexels-photo-3288100.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
            read_time: 3,
            views: 1210,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str) -> NewMessage {
        NewMessage {
            name: name.to_string(),
            email: format!("{}@example.in", name.to_lowercase()),
            subject: "Room availability".to_string(),
            message: "Is a 2BHK available from next month?".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_status_and_timestamp() {
        let store = MemoryMessageStore::new();
        let stored = store.insert_message(submission("Asha")).await.unwrap();
        assert!(!stored.id.is_empty());
        assert_eq!(stored.status, MessageStatus::New);
        assert_eq!(stored.name, "Asha");
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let store = MemoryMessageStore::new();
        let first = store.insert_message(submission("Asha")).await.unwrap();
        let second = store.insert_message(submission("Ravi")).await.unwrap();

        let listed = store.list_messages().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].created_at >= listed[1].created_at);
        let ids: Vec<&str> = listed.iter().map(|m| m.id.as_str()).collect();
        assert!(ids.contains(&first.id.as_str()));
        assert!(ids.contains(&second.id.as_str()));
    }

    #[tokio::test]
    async fn update_status_round_trips() {
        let store = MemoryMessageStore::new();
        let stored = store.insert_message(submission("Asha")).await.unwrap();

        let updated = store
            .update_status(&stored.id, MessageStatus::Replied)
            .await
            .unwrap();
        assert_eq!(updated.status, MessageStatus::Replied);

        let listed = store.list_messages().await.unwrap();
        assert_eq!(listed[0].status, MessageStatus::Replied);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemoryMessageStore::new();
        let err = store
            .update_status("missing", MessageStatus::Read)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_and_reports_missing() {
        let store = MemoryMessageStore::new();
        let stored = store.insert_message(submission("Asha")).await.unwrap();

        store.delete_message(&stored.id).await.unwrap();
        assert!(store.list_messages().await.unwrap().is_empty());

        let err = store.delete_message(&stored.id).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn posts_list_newest_first() {
        let store = MemoryPostStore::with_seed_posts();
        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|w| w[0].published_at >= w[1].published_at));
        assert_eq!(posts[0].id, "post-2");
    }
}
