//! Cascading state → city → area selection.
//!
//! Mirrors the search wizard's location step: choosing a state recomputes
//! the valid cities and drops any stale city/area choice; choosing a city
//! recomputes the valid areas and drops any stale area choice. The whole
//! cascade is re-derivable from the current state/city pair, so this type
//! holds no state of its own beyond the selection.

use awaas_catalog::CatalogStore;
use awaas_search_models::SearchPreferences;

/// Current location selection plus the option lists derived from it.
#[derive(Debug, Clone, Default)]
pub struct LocationSelection {
    state: String,
    city: String,
    area: String,
    available_cities: Vec<String>,
    available_areas: Vec<String>,
}

impl LocationSelection {
    /// Starts with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a state (empty string clears the selection).
    ///
    /// Recomputes the available cities and unconditionally clears the city
    /// and area choices along with the area options.
    pub fn set_state(&mut self, store: &CatalogStore, state: &str) {
        self.state = state.to_string();
        self.city.clear();
        self.area.clear();
        self.available_areas.clear();
        self.available_cities = if state.is_empty() {
            Vec::new()
        } else {
            store.cities_for_state(state)
        };
    }

    /// Selects a city (empty string clears the selection).
    ///
    /// Recomputes the available areas and clears the area choice.
    pub fn set_city(&mut self, store: &CatalogStore, city: &str) {
        self.city = city.to_string();
        self.area.clear();
        self.available_areas = if city.is_empty() {
            Vec::new()
        } else {
            store.areas_for_city(city)
        };
    }

    /// Selects an area.
    pub fn set_area(&mut self, area: &str) {
        self.area = area.to_string();
    }

    /// Currently selected state ("" when unset).
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Currently selected city ("" when unset).
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Currently selected area ("" when unset).
    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Cities valid for the selected state.
    #[must_use]
    pub fn available_cities(&self) -> &[String] {
        &self.available_cities
    }

    /// Areas valid for the selected city.
    #[must_use]
    pub fn available_areas(&self) -> &[String] {
        &self.available_areas
    }

    /// Copies the selection into a preferences value.
    pub fn apply(&self, prefs: &mut SearchPreferences) {
        prefs.state = self.state.clone();
        prefs.city = self.city.clone();
        prefs.area = self.area.clone();
    }
}
