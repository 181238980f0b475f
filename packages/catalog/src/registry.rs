//! Compile-time registry of the state/city seed map.
//!
//! The seed map is a TOML file embedded via `include_str!`. Adding a state
//! or city means editing `seed/states.toml`; the shape is enforced by
//! tests rather than runtime validation.

use serde::Deserialize;

/// Number of states in the seed map. Updated when states are added.
/// Enforced by a test.
#[cfg(test)]
const EXPECTED_STATE_COUNT: usize = 29;

/// Number of cities listed per state. Enforced by a test.
#[cfg(test)]
const CITIES_PER_STATE: usize = 10;

/// Embedded seed map TOML.
const SEED_TOML: &str = include_str!("../seed/states.toml");

/// One state entry in the seed map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedState {
    /// State name (e.g. `"Karnataka"`).
    pub name: String,
    /// Cities in listing order.
    pub cities: Vec<String>,
}

/// Top-level seed map document.
#[derive(Debug, Deserialize)]
struct SeedDocument {
    states: Vec<SeedState>,
}

/// Returns the seed map states in file order.
///
/// # Panics
///
/// Panics if the embedded TOML fails to parse. Since the seed map is a
/// compile-time constant, a parse failure indicates a development error
/// and is caught by tests.
#[must_use]
pub fn seed_states() -> Vec<SeedState> {
    let doc: SeedDocument = toml::de::from_str(SEED_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse embedded seed map: {e}"));
    doc.states
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn loads_expected_state_count() {
        let states = seed_states();
        assert_eq!(
            states.len(),
            EXPECTED_STATE_COUNT,
            "Expected {EXPECTED_STATE_COUNT} states, found {}. \
             Update EXPECTED_STATE_COUNT after adding/removing states.",
            states.len()
        );
    }

    #[test]
    fn every_state_has_ten_cities() {
        for state in &seed_states() {
            assert_eq!(
                state.cities.len(),
                CITIES_PER_STATE,
                "State {} lists {} cities",
                state.name,
                state.cities.len()
            );
        }
    }

    #[test]
    fn state_names_are_unique() {
        let states = seed_states();
        let mut seen = BTreeSet::new();
        for state in &states {
            assert!(seen.insert(&state.name), "Duplicate state: {}", state.name);
        }
    }

    #[test]
    fn cities_are_unique_within_a_state() {
        for state in &seed_states() {
            let mut seen = BTreeSet::new();
            for city in &state.cities {
                assert!(
                    seen.insert(city),
                    "Duplicate city {city} in state {}",
                    state.name
                );
            }
        }
    }

    #[test]
    fn no_blank_names() {
        for state in &seed_states() {
            assert!(!state.name.trim().is_empty());
            for city in &state.cities {
                assert!(!city.trim().is_empty(), "Blank city in {}", state.name);
            }
        }
    }
}
