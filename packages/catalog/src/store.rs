//! Read-only catalog queries.
//!
//! [`CatalogStore`] owns the seed map and the generated community records
//! and answers structural queries. It has no mutation operations: the
//! collection is fixed for the lifetime of the store, which is what makes
//! concurrent search evaluation safe without locking.

use awaas_catalog_models::Community;

use crate::generate::generate_catalog;
use crate::registry::{SeedState, seed_states};

/// The immutable community catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    states: Vec<SeedState>,
    communities: Vec<Community>,
}

impl CatalogStore {
    /// Builds a store from an explicit seed map and record collection.
    ///
    /// Used by tests that need a fixture catalog; production callers use
    /// [`CatalogStore::generate`].
    #[must_use]
    pub const fn new(states: Vec<SeedState>, communities: Vec<Community>) -> Self {
        Self { states, communities }
    }

    /// Builds a store from the embedded seed map and a numeric seed.
    #[must_use]
    pub fn generate(seed: u64) -> Self {
        let states = seed_states();
        let communities = generate_catalog(&states, seed);
        log::info!(
            "Catalog ready: {} communities across {} states",
            communities.len(),
            states.len()
        );
        Self { states, communities }
    }

    /// Returns state names in seed order.
    #[must_use]
    pub fn states(&self) -> Vec<String> {
        self.states.iter().map(|s| s.name.clone()).collect()
    }

    /// Returns the cities of a state in seed order, or an empty vector for
    /// an unknown state.
    #[must_use]
    pub fn cities_for_state(&self, state: &str) -> Vec<String> {
        self.states
            .iter()
            .find(|s| s.name == state)
            .map(|s| s.cities.clone())
            .unwrap_or_default()
    }

    /// Returns every city across every state, flattened in seed order.
    ///
    /// Not deduplicated: two states sharing a city name both contribute an
    /// entry.
    #[must_use]
    pub fn all_cities(&self) -> Vec<String> {
        self.states
            .iter()
            .flat_map(|s| s.cities.iter().cloned())
            .collect()
    }

    /// Returns the distinct areas of communities in a city, in first-seen
    /// record order.
    #[must_use]
    pub fn areas_for_city(&self, city: &str) -> Vec<String> {
        let mut areas: Vec<String> = Vec::new();
        for community in self.communities.iter().filter(|c| c.city == city) {
            if !areas.contains(&community.area) {
                areas.push(community.area.clone());
            }
        }
        areas
    }

    /// Looks up a community by its identifier.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Community> {
        self.communities.iter().find(|c| c.id == id)
    }

    /// Case-insensitive substring search over name, city, state, display
    /// location, and area.
    ///
    /// A blank query is the "no search yet" default and returns the whole
    /// catalog, not an empty result.
    #[must_use]
    pub fn text_search(&self, query: &str) -> Vec<&Community> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return self.communities.iter().collect();
        }
        self.communities
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term)
                    || c.city.to_lowercase().contains(&term)
                    || c.state.to_lowercase().contains(&term)
                    || c.location.to_lowercase().contains(&term)
                    || c.area.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Returns the communities of a state, by exact match.
    #[must_use]
    pub fn communities_for_state(&self, state: &str) -> Vec<&Community> {
        self.communities.iter().filter(|c| c.state == state).collect()
    }

    /// Returns the communities of a city, by exact match.
    #[must_use]
    pub fn communities_for_city(&self, city: &str) -> Vec<&Community> {
        self.communities.iter().filter(|c| c.city == city).collect()
    }

    /// Returns the communities of an area, by exact match.
    #[must_use]
    pub fn communities_for_area(&self, area: &str) -> Vec<&Community> {
        self.communities.iter().filter(|c| c.area == area).collect()
    }

    /// Returns all records in generation order.
    #[must_use]
    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    /// Returns the number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    /// Returns `true` if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }
}
