#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The community filter engine.
//!
//! Takes a base result set (free-text search output, or the whole catalog)
//! and a [`awaas_search_models::SearchPreferences`] value, and returns the
//! records satisfying the conjunction of every active predicate. Evaluation
//! is a pure, stateless computation: each record is judged independently
//! against the preferences, relative order is preserved, and the catalog is
//! never mutated, so concurrent searches need no coordination.

pub mod budget;
pub mod cascade;
pub mod engine;

pub use budget::price_ceiling;
pub use cascade::LocationSelection;
pub use engine::{filter, matches_preferences};
