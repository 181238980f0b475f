//! Stored record types for the storage collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Moderation status of a contact message.
///
/// Transitions are free-form: an admin may set any status at any time.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageStatus {
    /// Submitted, not yet looked at.
    #[default]
    New,
    /// Seen by an admin.
    Read,
    /// An admin has responded.
    Replied,
}

/// A contact form submission before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Storage-assigned identifier (UUID v4).
    pub id: String,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Moderation status.
    pub status: MessageStatus,
    /// Submission time.
    pub created_at: DateTime<Utc>,
}

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Stable identifier.
    pub id: String,
    /// Post title.
    pub title: String,
    /// Short teaser shown in listings.
    pub excerpt: String,
    /// Full body.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Publish date.
    pub published_at: DateTime<Utc>,
    /// Topic category.
    pub category: String,
    /// Header image URL.
    pub image_url: String,
    /// Estimated read time in minutes.
    pub read_time: u32,
    /// View counter.
    pub views: u32,
}
