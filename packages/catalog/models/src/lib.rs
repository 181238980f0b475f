#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Community record types for the awaas directory.
//!
//! This crate defines the canonical representation of a residential
//! community as held by the catalog store. Records are generated once at
//! startup and are immutable afterwards; every other crate in the workspace
//! reads these types and never mutates them.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Reported crime-rate category for a community.
///
/// This is an opaque label, not an ordinal scale: filters compare it by
/// exact equality only. "Medium or lower" semantics are deliberately not
/// implemented anywhere in the workspace.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CrimeRate {
    /// Few reported incidents.
    Low,
    /// Moderate reported incidents.
    Medium,
    /// Frequent reported incidents.
    High,
}

impl CrimeRate {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// Direction a community's safety situation is moving in.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum Trend {
    /// Incident counts are falling.
    Improving,
    /// No significant change.
    Stable,
    /// Incident counts are rising.
    Declining,
}

/// Nearby amenity counts and on-premise facility flags for a community.
///
/// Counts are non-negative totals of establishments within the locality;
/// `transport` is a 0-10 connectivity score rather than a count. The boolean
/// fields record whether the community itself offers the facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenities {
    pub schools: u32,
    pub hospitals: u32,
    pub banks: u32,
    pub malls: u32,
    pub restaurants: u32,
    pub gyms: u32,
    pub parks: u32,
    pub pharmacy: u32,
    pub supermarkets: u32,
    pub atms: u32,
    pub petrol_pumps: u32,
    /// Connectivity score, 0-10.
    pub transport: u32,
    pub wifi: bool,
    pub power_backup: bool,
    pub water_supply: bool,
    pub security: bool,
    pub cctv: bool,
    pub parking: bool,
    pub elevator: bool,
    pub garden: bool,
    pub playground: bool,
    pub clubhouse: bool,
    pub swimming: bool,
    pub metro: bool,
    pub bus: bool,
}

/// Infrastructure quality scores for a community, each nominally 0-5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    pub road_quality: f64,
    pub water_supply: f64,
    pub power_supply: f64,
    pub internet_speed: f64,
    pub waste_management: f64,
    pub street_lights: f64,
    pub drainage: f64,
    pub public_transport: f64,
}

/// Resident demographics. Display-only; never filtered on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    /// Total resident count.
    pub total_residents: u32,
    /// Average resident age in years.
    pub average_age: u32,
    /// Percentage of family households (0-100).
    pub family_friendly: u32,
    /// Percentage of student residents (0-100).
    pub student_population: u32,
}

/// Contact details for a community's property management. Display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Property manager name.
    pub property_manager: String,
    /// Office phone number.
    pub phone: String,
    /// Office email address.
    pub email: String,
    /// WhatsApp contact number.
    pub whatsapp: String,
    /// Full postal address.
    pub address: String,
}

/// A residential community record as held by the catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    /// Unique, stable identifier (e.g. `"community-42"`).
    pub id: String,
    /// Display name (e.g. `"Bangalore Heights"`).
    pub name: String,
    /// Display location line. Matches `area` for generated records.
    pub location: String,
    /// City the community belongs to.
    pub city: String,
    /// State the community belongs to.
    pub state: String,
    /// Area/locality within the city (e.g. `"East Bangalore"`).
    ///
    /// `state -> city -> area` is a non-enforced hierarchy: an area string
    /// is produced for exactly one city by generation, but nothing in the
    /// model forbids the same string appearing under two cities.
    pub area: String,
    /// Display image URL.
    pub image: String,
    /// Monthly rent range as display text (e.g. `"₹8K - ₹45K"`).
    pub price_range: String,
    /// Number of rooms currently available.
    pub available_rooms: u32,
    /// Safety rating, 0-5.
    pub safety_rating: f64,
    /// Hospitality score, 0-5.
    pub hospitality_score: f64,
    /// Cleanliness rating, 0-5.
    pub cleanliness_rating: f64,
    /// Reported crime-rate category.
    pub crime_rate: CrimeRate,
    /// Incidents reported in the recent period.
    pub recent_crimes: u32,
    /// Direction the safety situation is moving in.
    pub trend: Trend,
    /// Whether the listing has been verified by the directory.
    pub is_verified: bool,
    /// Short display tags, 3-6 entries.
    pub highlights: Vec<String>,
    /// Amenity counts and facility flags.
    pub amenities: Amenities,
    /// Infrastructure quality scores.
    pub infrastructure: Infrastructure,
    /// Resident demographics.
    pub demographics: Demographics,
    /// Property management contact details.
    pub contact_info: ContactInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crime_rate_round_trips_through_strings() {
        for rate in CrimeRate::all() {
            let parsed: CrimeRate = rate.to_string().parse().unwrap();
            assert_eq!(parsed, *rate);
        }
    }

    #[test]
    fn trend_serializes_lowercase() {
        let json = serde_json::to_string(&Trend::Improving).unwrap();
        assert_eq!(json, "\"improving\"");
    }

    #[test]
    fn crime_rate_serializes_capitalized() {
        let json = serde_json::to_string(&CrimeRate::Low).unwrap();
        assert_eq!(json, "\"Low\"");
    }
}
