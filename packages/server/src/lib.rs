#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the awaas directory.
//!
//! Serves the community search API (catalog enumeration, filtered search,
//! detail lookup), the contact form, the admin message moderation surface,
//! and the blog post listing. The catalog is generated once at startup and
//! shared immutably across workers; the storage collaborators are the
//! in-memory backends.

pub mod handlers;

use actix_web::HttpRequest;
use awaas_catalog::CatalogStore;
use awaas_storage::{MessageStore, PostStore};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    /// The immutable community catalog.
    pub catalog: Arc<CatalogStore>,
    /// Contact message storage collaborator.
    pub messages: Arc<dyn MessageStore>,
    /// Blog post storage collaborator.
    pub posts: Arc<dyn PostStore>,
    /// Bearer token required by the admin endpoints. `None` disables them.
    pub admin_token: Option<String>,
}

impl AppState {
    /// Returns `true` if the request carries the configured admin token.
    ///
    /// With no token configured every admin request is rejected: admin
    /// capability is granted explicitly through the environment, never
    /// ambiently.
    #[must_use]
    pub fn is_admin(&self, req: &HttpRequest) -> bool {
        let Some(expected) = self.admin_token.as_deref() else {
            return false;
        };
        req.headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .is_some_and(|token| token == expected)
    }
}
