#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Storage collaborators for the admin and contact surfaces.
//!
//! The directory treats message and blog-post storage as an external
//! collaborator: the rest of the workspace depends only on the
//! [`MessageStore`] and [`PostStore`] traits, never on a concrete backend.
//! The in-memory implementations in [`memory`] are the only backend this
//! workspace ships; a hosted database would implement the same traits.
//!
//! A failed operation is simply not applied - callers surface the error as
//! a transient notification and the user may resubmit. No retry policy
//! lives here.

pub mod memory;
pub mod models;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{BlogPost, ContactMessage, MessageStatus, NewMessage};

/// Errors surfaced by storage collaborators.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record exists with the given identifier.
    #[error("No record with id {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The backend could not be reached or was in an unusable state.
    #[error("Storage unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },
}

/// Contact message storage: insert, list, moderate, delete.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Stores a new submission and returns the stored record.
    async fn insert_message(&self, submission: NewMessage) -> Result<ContactMessage, StorageError>;

    /// Lists all messages, newest first.
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, StorageError>;

    /// Sets the status of a message and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no message has the identifier.
    async fn update_status(
        &self,
        id: &str,
        status: MessageStatus,
    ) -> Result<ContactMessage, StorageError>;

    /// Deletes a message.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no message has the identifier.
    async fn delete_message(&self, id: &str) -> Result<(), StorageError>;
}

/// Blog post storage.
///
/// Listing only: post create/edit/delete exist as admin UI affordances but
/// are not wired to persistence, so the collaborator contract does not
/// include them.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Lists all posts, newest publish date first.
    async fn list_posts(&self) -> Result<Vec<BlogPost>, StorageError>;
}
