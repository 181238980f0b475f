#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Community catalog: seeded generation and read-only queries.
//!
//! The catalog is produced once at startup from the embedded state/city
//! seed map and a numeric seed, then never mutated. [`store::CatalogStore`]
//! owns the generated records and answers structural queries (state/city
//! enumeration, area derivation, lookup by id, free-text search); the
//! search crate layers preference filtering on top of it.

pub mod generate;
pub mod registry;
pub mod store;

pub use registry::SeedState;
pub use store::CatalogStore;
