#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Search preference types consumed by the filter engine.
//!
//! [`SearchPreferences`] is deliberately one flat struct rather than a tree
//! of option groups: every field is independently toggled by the search
//! wizard, and the zero-value convention (empty string, `0`, `false`,
//! [`CrimeRateFilter::All`]) encodes "no constraint". A default-constructed
//! preferences value therefore excludes nothing.

use awaas_catalog_models::CrimeRate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Crime-rate preference.
///
/// Anything other than [`Self::All`] is matched by exact equality against
/// the record's category. The category is an opaque label here, not an
/// ordinal scale: selecting `Medium` matches medium-crime communities only,
/// never "medium or lower".
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
pub enum CrimeRateFilter {
    /// Any crime-rate category passes.
    #[default]
    #[serde(rename = "all")]
    #[strum(serialize = "all")]
    All,
    /// Only low-crime communities pass.
    Low,
    /// Only medium-crime communities pass.
    Medium,
    /// Only high-crime communities pass.
    High,
}

impl CrimeRateFilter {
    /// Returns `true` if a record with the given category passes this
    /// filter.
    #[must_use]
    pub fn matches(self, rate: CrimeRate) -> bool {
        match self {
            Self::All => true,
            Self::Low => rate == CrimeRate::Low,
            Self::Medium => rate == CrimeRate::Medium,
            Self::High => rate == CrimeRate::High,
        }
    }
}

/// One search interaction's worth of filter criteria.
///
/// Constructed per search (by the wizard or from API query parameters) and
/// discarded afterwards; never persisted. Every field's default imposes no
/// restriction, so partially-filled preferences only constrain the axes the
/// caller actually set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchPreferences {
    /// Exact state match; empty means any state.
    pub state: String,
    /// Exact city match; empty means any city.
    pub city: String,
    /// Exact area match; empty means any area.
    pub area: String,
    /// Upper bound on the rent ceiling parsed from the record's price
    /// range, in rupees.
    pub max_budget: u32,
    /// Minimum hospitality score, 0-5.
    pub min_hospitality: f64,
    /// Minimum safety rating, 0-5.
    pub min_safety: f64,
    pub min_schools: u32,
    pub min_hospitals: u32,
    pub min_banks: u32,
    pub min_malls: u32,
    pub min_restaurants: u32,
    pub min_gyms: u32,
    pub min_parks: u32,
    pub min_pharmacy: u32,
    pub min_supermarkets: u32,
    pub min_atms: u32,
    pub min_petrol_pumps: u32,
    /// Minimum transport connectivity score, 0-10.
    pub min_transport: u32,
    /// Crime-rate category filter.
    pub crime_rate: CrimeRateFilter,
    /// Only verified listings pass when set.
    pub verified_only: bool,
    pub wifi_required: bool,
    pub power_backup_required: bool,
    pub water_supply_required: bool,
    pub security_required: bool,
    pub cctv_required: bool,
    pub parking_required: bool,
    pub elevator_required: bool,
    pub garden_required: bool,
    pub playground_required: bool,
    pub clubhouse_required: bool,
    pub swimming_required: bool,
    pub metro_required: bool,
    pub bus_required: bool,
    pub min_road_quality: f64,
    pub min_water_supply: f64,
    pub min_power_supply: f64,
    pub min_internet_speed: f64,
    pub min_waste_management: f64,
    pub min_street_lights: f64,
    pub min_drainage: f64,
    pub min_public_transport: f64,
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self {
            state: String::new(),
            city: String::new(),
            area: String::new(),
            // The budget default is the most permissive possible ceiling,
            // not the wizard's slider start: a default-constructed
            // preferences value must exclude nothing.
            max_budget: u32::MAX,
            min_hospitality: 0.0,
            min_safety: 0.0,
            min_schools: 0,
            min_hospitals: 0,
            min_banks: 0,
            min_malls: 0,
            min_restaurants: 0,
            min_gyms: 0,
            min_parks: 0,
            min_pharmacy: 0,
            min_supermarkets: 0,
            min_atms: 0,
            min_petrol_pumps: 0,
            min_transport: 0,
            crime_rate: CrimeRateFilter::All,
            verified_only: false,
            wifi_required: false,
            power_backup_required: false,
            water_supply_required: false,
            security_required: false,
            cctv_required: false,
            parking_required: false,
            elevator_required: false,
            garden_required: false,
            playground_required: false,
            clubhouse_required: false,
            swimming_required: false,
            metro_required: false,
            bus_required: false,
            min_road_quality: 0.0,
            min_water_supply: 0.0,
            min_power_supply: 0.0,
            min_internet_speed: 0.0,
            min_waste_management: 0.0,
            min_street_lights: 0.0,
            min_drainage: 0.0,
            min_public_transport: 0.0,
        }
    }
}
