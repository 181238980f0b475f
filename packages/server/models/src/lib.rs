#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the awaas directory server.
//!
//! These types are serialized to JSON for the REST API. Community detail
//! responses reuse the catalog record directly (it already serializes
//! camelCase); the types here cover listings, query parameters, and the
//! admin surface.

use awaas_catalog_models::{Community, CrimeRate};
use awaas_search_models::{CrimeRateFilter, SearchPreferences};
use awaas_storage::models::MessageStatus;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Always `true` when the server can respond.
    pub healthy: bool,
    /// Server crate version.
    pub version: String,
}

/// A community as returned in search listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCommunitySummary {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display location line.
    pub location: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Area within the city.
    pub area: String,
    /// Display image URL.
    pub image: String,
    /// Rent range display text.
    pub price_range: String,
    /// Rooms currently available.
    pub available_rooms: u32,
    /// Safety rating, 0-5.
    pub safety_rating: f64,
    /// Hospitality score, 0-5.
    pub hospitality_score: f64,
    /// Crime-rate category.
    pub crime_rate: CrimeRate,
    /// Verification badge.
    pub is_verified: bool,
    /// Display tags.
    pub highlights: Vec<String>,
}

impl From<&Community> for ApiCommunitySummary {
    fn from(community: &Community) -> Self {
        Self {
            id: community.id.clone(),
            name: community.name.clone(),
            location: community.location.clone(),
            city: community.city.clone(),
            state: community.state.clone(),
            area: community.area.clone(),
            image: community.image.clone(),
            price_range: community.price_range.clone(),
            available_rooms: community.available_rooms,
            safety_rating: community.safety_rating,
            hospitality_score: community.hospitality_score,
            crime_rate: community.crime_rate,
            is_verified: community.is_verified,
            highlights: community.highlights.clone(),
        }
    }
}

/// Search listing response: match count plus the echoed preferences, so the
/// caller can render its "active filters" summary without re-deriving them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSearchResponse {
    /// Number of matching communities.
    pub count: usize,
    /// The preferences the engine evaluated.
    pub preferences: SearchPreferences,
    /// Matching communities in catalog order.
    pub results: Vec<ApiCommunitySummary>,
}

/// Query parameters for the community search endpoint.
///
/// Every preference axis is an optional camelCase parameter; a missing
/// parameter leaves the axis at its no-constraint default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityQueryParams {
    /// Free-text search term.
    pub q: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub max_budget: Option<u32>,
    pub min_hospitality: Option<f64>,
    pub min_safety: Option<f64>,
    pub min_schools: Option<u32>,
    pub min_hospitals: Option<u32>,
    pub min_banks: Option<u32>,
    pub min_malls: Option<u32>,
    pub min_restaurants: Option<u32>,
    pub min_gyms: Option<u32>,
    pub min_parks: Option<u32>,
    pub min_pharmacy: Option<u32>,
    pub min_supermarkets: Option<u32>,
    pub min_atms: Option<u32>,
    pub min_petrol_pumps: Option<u32>,
    pub min_transport: Option<u32>,
    pub crime_rate: Option<CrimeRateFilter>,
    pub verified_only: Option<bool>,
    pub wifi_required: Option<bool>,
    pub power_backup_required: Option<bool>,
    pub water_supply_required: Option<bool>,
    pub security_required: Option<bool>,
    pub cctv_required: Option<bool>,
    pub parking_required: Option<bool>,
    pub elevator_required: Option<bool>,
    pub garden_required: Option<bool>,
    pub playground_required: Option<bool>,
    pub clubhouse_required: Option<bool>,
    pub swimming_required: Option<bool>,
    pub metro_required: Option<bool>,
    pub bus_required: Option<bool>,
    pub min_road_quality: Option<f64>,
    pub min_water_supply: Option<f64>,
    pub min_power_supply: Option<f64>,
    pub min_internet_speed: Option<f64>,
    pub min_waste_management: Option<f64>,
    pub min_street_lights: Option<f64>,
    pub min_drainage: Option<f64>,
    pub min_public_transport: Option<f64>,
}

impl CommunityQueryParams {
    /// Builds engine preferences from the supplied parameters, leaving
    /// missing axes at their defaults.
    #[must_use]
    pub fn into_preferences(self) -> SearchPreferences {
        let mut prefs = SearchPreferences::default();
        if let Some(state) = self.state {
            prefs.state = state;
        }
        if let Some(city) = self.city {
            prefs.city = city;
        }
        if let Some(area) = self.area {
            prefs.area = area;
        }
        if let Some(max_budget) = self.max_budget {
            prefs.max_budget = max_budget;
        }
        if let Some(v) = self.min_hospitality {
            prefs.min_hospitality = v;
        }
        if let Some(v) = self.min_safety {
            prefs.min_safety = v;
        }
        if let Some(v) = self.min_schools {
            prefs.min_schools = v;
        }
        if let Some(v) = self.min_hospitals {
            prefs.min_hospitals = v;
        }
        if let Some(v) = self.min_banks {
            prefs.min_banks = v;
        }
        if let Some(v) = self.min_malls {
            prefs.min_malls = v;
        }
        if let Some(v) = self.min_restaurants {
            prefs.min_restaurants = v;
        }
        if let Some(v) = self.min_gyms {
            prefs.min_gyms = v;
        }
        if let Some(v) = self.min_parks {
            prefs.min_parks = v;
        }
        if let Some(v) = self.min_pharmacy {
            prefs.min_pharmacy = v;
        }
        if let Some(v) = self.min_supermarkets {
            prefs.min_supermarkets = v;
        }
        if let Some(v) = self.min_atms {
            prefs.min_atms = v;
        }
        if let Some(v) = self.min_petrol_pumps {
            prefs.min_petrol_pumps = v;
        }
        if let Some(v) = self.min_transport {
            prefs.min_transport = v;
        }
        if let Some(v) = self.crime_rate {
            prefs.crime_rate = v;
        }
        if let Some(v) = self.verified_only {
            prefs.verified_only = v;
        }
        if let Some(v) = self.wifi_required {
            prefs.wifi_required = v;
        }
        if let Some(v) = self.power_backup_required {
            prefs.power_backup_required = v;
        }
        if let Some(v) = self.water_supply_required {
            prefs.water_supply_required = v;
        }
        if let Some(v) = self.security_required {
            prefs.security_required = v;
        }
        if let Some(v) = self.cctv_required {
            prefs.cctv_required = v;
        }
        if let Some(v) = self.parking_required {
            prefs.parking_required = v;
        }
        if let Some(v) = self.elevator_required {
            prefs.elevator_required = v;
        }
        if let Some(v) = self.garden_required {
            prefs.garden_required = v;
        }
        if let Some(v) = self.playground_required {
            prefs.playground_required = v;
        }
        if let Some(v) = self.clubhouse_required {
            prefs.clubhouse_required = v;
        }
        if let Some(v) = self.swimming_required {
            prefs.swimming_required = v;
        }
        if let Some(v) = self.metro_required {
            prefs.metro_required = v;
        }
        if let Some(v) = self.bus_required {
            prefs.bus_required = v;
        }
        if let Some(v) = self.min_road_quality {
            prefs.min_road_quality = v;
        }
        if let Some(v) = self.min_water_supply {
            prefs.min_water_supply = v;
        }
        if let Some(v) = self.min_power_supply {
            prefs.min_power_supply = v;
        }
        if let Some(v) = self.min_internet_speed {
            prefs.min_internet_speed = v;
        }
        if let Some(v) = self.min_waste_management {
            prefs.min_waste_management = v;
        }
        if let Some(v) = self.min_street_lights {
            prefs.min_street_lights = v;
        }
        if let Some(v) = self.min_drainage {
            prefs.min_drainage = v;
        }
        if let Some(v) = self.min_public_transport {
            prefs.min_public_transport = v;
        }
        prefs
    }
}

/// Body of a message status update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    /// The status to set.
    pub status: MessageStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_yield_default_preferences() {
        let prefs = CommunityQueryParams::default().into_preferences();
        assert_eq!(prefs, SearchPreferences::default());
    }

    #[test]
    fn supplied_params_override_their_axes_only() {
        let params = CommunityQueryParams {
            state: Some("Karnataka".to_string()),
            min_safety: Some(4.0),
            crime_rate: Some(CrimeRateFilter::Low),
            swimming_required: Some(true),
            ..CommunityQueryParams::default()
        };
        let prefs = params.into_preferences();
        assert_eq!(prefs.state, "Karnataka");
        assert!((prefs.min_safety - 4.0).abs() < f64::EPSILON);
        assert_eq!(prefs.crime_rate, CrimeRateFilter::Low);
        assert!(prefs.swimming_required);
        // Untouched axes stay permissive.
        assert_eq!(prefs.max_budget, u32::MAX);
        assert!(prefs.city.is_empty());
        assert!(!prefs.wifi_required);
    }

    #[test]
    fn camel_case_keys_deserialize() {
        let params: CommunityQueryParams = serde_json::from_str(
            r#"{"q":"bangalore","maxBudget":45000,"crimeRate":"Low","verifiedOnly":true}"#,
        )
        .unwrap();
        assert_eq!(params.q.as_deref(), Some("bangalore"));
        assert_eq!(params.max_budget, Some(45_000));
        assert_eq!(params.crime_rate, Some(CrimeRateFilter::Low));
        assert_eq!(params.verified_only, Some(true));
    }

    #[test]
    fn summary_projects_the_record() {
        let store = awaas_catalog::CatalogStore::generate(1);
        let community = &store.communities()[0];
        let summary = ApiCommunitySummary::from(community);
        assert_eq!(summary.id, community.id);
        assert_eq!(summary.price_range, community.price_range);
        assert_eq!(summary.crime_rate, community.crime_rate);
    }
}
