//! Predicate evaluation over community records.
//!
//! Each preference axis contributes one predicate; a record matches only if
//! every active predicate passes. Unset axes (zero minimums, empty location
//! strings, `All` crime filter, unrequired facilities) are vacuously true,
//! so tightening any single axis can only shrink the result set.

use awaas_catalog_models::Community;
use awaas_search_models::SearchPreferences;

use crate::budget::price_ceiling;

/// Returns `true` if a record satisfies every active predicate.
///
/// Membership is a pure function of the record and the preferences: no
/// cross-record state, no early termination across records.
#[must_use]
pub fn matches_preferences(community: &Community, prefs: &SearchPreferences) -> bool {
    let amenities = &community.amenities;
    let infra = &community.infrastructure;

    let matches_location = (prefs.state.is_empty() || community.state == prefs.state)
        && (prefs.city.is_empty() || community.city == prefs.city)
        && (prefs.area.is_empty() || community.area == prefs.area);

    let matches_ratings = community.safety_rating >= prefs.min_safety
        && community.hospitality_score >= prefs.min_hospitality;

    let matches_crime = prefs.crime_rate.matches(community.crime_rate);

    let matches_verified = !prefs.verified_only || community.is_verified;

    let matches_counts = amenities.schools >= prefs.min_schools
        && amenities.hospitals >= prefs.min_hospitals
        && amenities.banks >= prefs.min_banks
        && amenities.malls >= prefs.min_malls
        && amenities.restaurants >= prefs.min_restaurants
        && amenities.gyms >= prefs.min_gyms
        && amenities.parks >= prefs.min_parks
        && amenities.pharmacy >= prefs.min_pharmacy
        && amenities.supermarkets >= prefs.min_supermarkets
        && amenities.atms >= prefs.min_atms
        && amenities.petrol_pumps >= prefs.min_petrol_pumps
        && amenities.transport >= prefs.min_transport;

    let matches_facilities = (!prefs.wifi_required || amenities.wifi)
        && (!prefs.power_backup_required || amenities.power_backup)
        && (!prefs.water_supply_required || amenities.water_supply)
        && (!prefs.security_required || amenities.security)
        && (!prefs.cctv_required || amenities.cctv)
        && (!prefs.parking_required || amenities.parking)
        && (!prefs.elevator_required || amenities.elevator)
        && (!prefs.garden_required || amenities.garden)
        && (!prefs.playground_required || amenities.playground)
        && (!prefs.clubhouse_required || amenities.clubhouse)
        && (!prefs.swimming_required || amenities.swimming)
        && (!prefs.metro_required || amenities.metro)
        && (!prefs.bus_required || amenities.bus);

    let matches_infrastructure = infra.road_quality >= prefs.min_road_quality
        && infra.water_supply >= prefs.min_water_supply
        && infra.power_supply >= prefs.min_power_supply
        && infra.internet_speed >= prefs.min_internet_speed
        && infra.waste_management >= prefs.min_waste_management
        && infra.street_lights >= prefs.min_street_lights
        && infra.drainage >= prefs.min_drainage
        && infra.public_transport >= prefs.min_public_transport;

    let matches_budget = price_ceiling(&community.price_range) <= prefs.max_budget;

    matches_location
        && matches_ratings
        && matches_crime
        && matches_verified
        && matches_counts
        && matches_facilities
        && matches_infrastructure
        && matches_budget
}

/// Filters a base result set down to the records satisfying the
/// preferences, preserving relative order.
#[must_use]
pub fn filter<'a>(base: &[&'a Community], prefs: &SearchPreferences) -> Vec<&'a Community> {
    let matched: Vec<&Community> = base
        .iter()
        .filter(|c| matches_preferences(c, prefs))
        .copied()
        .collect();
    log::debug!("Filter kept {} of {} communities", matched.len(), base.len());
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use awaas_catalog::CatalogStore;
    use awaas_catalog_models::{
        Amenities, ContactInfo, CrimeRate, Demographics, Infrastructure, Trend,
    };
    use awaas_search_models::CrimeRateFilter;

    /// A fully-featured Bangalore record used across the predicate tests.
    fn fixture() -> Community {
        Community {
            id: "community-1".to_string(),
            name: "Bangalore Heights".to_string(),
            location: "East Bangalore".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            area: "East Bangalore".to_string(),
            image: "https://example.com/img.jpeg".to_string(),
            price_range: "₹8K - ₹45K".to_string(),
            available_rooms: 12,
            safety_rating: 4.5,
            hospitality_score: 4.2,
            cleanliness_rating: 4.0,
            crime_rate: CrimeRate::Low,
            recent_crimes: 2,
            trend: Trend::Improving,
            is_verified: true,
            highlights: vec![
                "Safe Neighborhood".to_string(),
                "Good Connectivity".to_string(),
                "Family Friendly".to_string(),
            ],
            amenities: Amenities {
                schools: 10,
                hospitals: 4,
                banks: 12,
                malls: 3,
                restaurants: 40,
                gyms: 6,
                parks: 5,
                pharmacy: 7,
                supermarkets: 9,
                atms: 15,
                petrol_pumps: 4,
                transport: 8,
                wifi: true,
                power_backup: true,
                water_supply: true,
                security: true,
                cctv: false,
                parking: true,
                elevator: true,
                garden: true,
                playground: false,
                clubhouse: false,
                swimming: false,
                metro: true,
                bus: true,
            },
            infrastructure: Infrastructure {
                road_quality: 4.1,
                water_supply: 4.0,
                power_supply: 4.4,
                internet_speed: 4.8,
                waste_management: 3.6,
                street_lights: 4.2,
                drainage: 3.4,
                public_transport: 4.0,
            },
            demographics: Demographics {
                total_residents: 420,
                average_age: 33,
                family_friendly: 82,
                student_population: 25,
            },
            contact_info: ContactInfo {
                property_manager: "Priya Sharma".to_string(),
                phone: "+91 98765 43210".to_string(),
                email: "bangaloreheights@properties.in".to_string(),
                whatsapp: "+91 98765 43210".to_string(),
                address: "East Bangalore, Bangalore, Karnataka 560001".to_string(),
            },
        }
    }

    #[test]
    fn default_preferences_match_everything() {
        let store = CatalogStore::generate(42);
        let base: Vec<&Community> = store.communities().iter().collect();
        let results = filter(&base, &SearchPreferences::default());
        assert_eq!(results.len(), base.len());
        // Order unchanged too.
        assert!(results.iter().zip(&base).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn filtering_is_idempotent() {
        let store = CatalogStore::generate(42);
        let base: Vec<&Community> = store.communities().iter().collect();
        let prefs = SearchPreferences {
            min_safety: 4.2,
            verified_only: true,
            ..SearchPreferences::default()
        };
        let once = filter(&base, &prefs);
        let twice = filter(&once, &prefs);
        assert_eq!(
            once.iter().map(|c| &c.id).collect::<Vec<_>>(),
            twice.iter().map(|c| &c.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn location_match_is_exact_not_substring() {
        let community = fixture();
        let mut prefs = SearchPreferences {
            state: "Karnataka".to_string(),
            ..SearchPreferences::default()
        };
        assert!(matches_preferences(&community, &prefs));

        prefs.state = "Karna".to_string();
        assert!(!matches_preferences(&community, &prefs));

        prefs.state = "Karnataka".to_string();
        prefs.city = "Mysore".to_string();
        assert!(!matches_preferences(&community, &prefs));

        prefs.city = "Bangalore".to_string();
        prefs.area = "West Bangalore".to_string();
        assert!(!matches_preferences(&community, &prefs));

        prefs.area = "East Bangalore".to_string();
        assert!(matches_preferences(&community, &prefs));
    }

    #[test]
    fn amenity_count_boundary_is_inclusive() {
        let community = fixture();
        let mut prefs = SearchPreferences {
            min_schools: community.amenities.schools,
            ..SearchPreferences::default()
        };
        assert!(matches_preferences(&community, &prefs));

        prefs.min_schools += 1;
        assert!(!matches_preferences(&community, &prefs));
    }

    #[test]
    fn every_count_axis_can_exclude_on_its_own() {
        let community = fixture();
        let a = &community.amenities;
        let axes: Vec<(u32, fn(&mut SearchPreferences, u32))> = vec![
            (a.schools, |p, v| p.min_schools = v),
            (a.hospitals, |p, v| p.min_hospitals = v),
            (a.banks, |p, v| p.min_banks = v),
            (a.malls, |p, v| p.min_malls = v),
            (a.restaurants, |p, v| p.min_restaurants = v),
            (a.gyms, |p, v| p.min_gyms = v),
            (a.parks, |p, v| p.min_parks = v),
            (a.pharmacy, |p, v| p.min_pharmacy = v),
            (a.supermarkets, |p, v| p.min_supermarkets = v),
            (a.atms, |p, v| p.min_atms = v),
            (a.petrol_pumps, |p, v| p.min_petrol_pumps = v),
            (a.transport, |p, v| p.min_transport = v),
        ];
        for (count, set) in axes {
            let mut prefs = SearchPreferences::default();
            set(&mut prefs, count);
            assert!(matches_preferences(&community, &prefs));
            set(&mut prefs, count + 1);
            assert!(!matches_preferences(&community, &prefs));
        }
    }

    #[test]
    fn rating_thresholds_are_inclusive() {
        let community = fixture();
        let mut prefs = SearchPreferences {
            min_safety: 4.5,
            min_hospitality: 4.2,
            ..SearchPreferences::default()
        };
        assert!(matches_preferences(&community, &prefs));

        prefs.min_safety = 4.6;
        assert!(!matches_preferences(&community, &prefs));
    }

    #[test]
    fn crime_rate_filters_by_exact_category() {
        let community = fixture();
        let mut prefs = SearchPreferences {
            crime_rate: CrimeRateFilter::Low,
            ..SearchPreferences::default()
        };
        assert!(matches_preferences(&community, &prefs));

        // Not ordinal: "Medium" excludes a low-crime record.
        prefs.crime_rate = CrimeRateFilter::Medium;
        assert!(!matches_preferences(&community, &prefs));

        prefs.crime_rate = CrimeRateFilter::High;
        assert!(!matches_preferences(&community, &prefs));
    }

    #[test]
    fn verified_only_excludes_unverified() {
        let mut community = fixture();
        let prefs = SearchPreferences {
            verified_only: true,
            ..SearchPreferences::default()
        };
        assert!(matches_preferences(&community, &prefs));

        community.is_verified = false;
        assert!(!matches_preferences(&community, &prefs));
        assert!(matches_preferences(&community, &SearchPreferences::default()));
    }

    #[test]
    fn required_facility_excludes_when_absent() {
        let community = fixture();

        // Present facility: requirement passes.
        let prefs = SearchPreferences {
            metro_required: true,
            ..SearchPreferences::default()
        };
        assert!(matches_preferences(&community, &prefs));

        // Absent facility: requirement excludes.
        let prefs = SearchPreferences {
            swimming_required: true,
            ..SearchPreferences::default()
        };
        assert!(!matches_preferences(&community, &prefs));

        let prefs = SearchPreferences {
            cctv_required: true,
            ..SearchPreferences::default()
        };
        assert!(!matches_preferences(&community, &prefs));
    }

    #[test]
    fn infrastructure_thresholds_are_inclusive() {
        let community = fixture();
        let mut prefs = SearchPreferences {
            min_drainage: 3.4,
            min_internet_speed: 4.8,
            ..SearchPreferences::default()
        };
        assert!(matches_preferences(&community, &prefs));

        prefs.min_drainage = 3.5;
        assert!(!matches_preferences(&community, &prefs));
    }

    #[test]
    fn budget_bounds_the_price_ceiling() {
        let community = fixture();
        let mut prefs = SearchPreferences {
            max_budget: 45_000,
            ..SearchPreferences::default()
        };
        assert!(matches_preferences(&community, &prefs));

        prefs.max_budget = 44_999;
        assert!(!matches_preferences(&community, &prefs));
    }

    #[test]
    fn unparseable_price_passes_any_positive_budget() {
        let mut community = fixture();
        community.price_range = "price on request".to_string();
        let prefs = SearchPreferences {
            max_budget: 1,
            ..SearchPreferences::default()
        };
        assert!(matches_preferences(&community, &prefs));
    }

    #[test]
    fn tightening_any_axis_never_grows_the_result_set() {
        let store = CatalogStore::generate(42);
        let base: Vec<&Community> = store.communities().iter().collect();

        let mut prefs = SearchPreferences::default();
        let mut previous = filter(&base, &prefs).len();

        let steps: Vec<fn(&mut SearchPreferences)> = vec![
            |p| p.min_safety = 4.0,
            |p| p.crime_rate = CrimeRateFilter::Low,
            |p| p.verified_only = true,
            |p| p.min_schools = 8,
            |p| p.wifi_required = true,
            |p| p.min_road_quality = 4.0,
            |p| p.max_budget = 60_000,
        ];
        for step in steps {
            step(&mut prefs);
            let current = filter(&base, &prefs);
            assert!(
                current.len() <= previous,
                "Tightening grew results: {} -> {}",
                previous,
                current.len()
            );
            // Every survivor must satisfy the tightened preferences too.
            assert!(current.iter().all(|c| matches_preferences(c, &prefs)));
            previous = current.len();
        }
    }

    #[test]
    fn karnataka_end_to_end_scenario() {
        let community = fixture();
        let base = vec![&community];

        let mut prefs = SearchPreferences {
            state: "Karnataka".to_string(),
            min_safety: 4.0,
            crime_rate: CrimeRateFilter::Low,
            min_schools: 5,
            max_budget: 50_000,
            ..SearchPreferences::default()
        };
        assert_eq!(filter(&base, &prefs).len(), 1);

        prefs.max_budget = 40_000;
        assert!(filter(&base, &prefs).is_empty());

        prefs.max_budget = 50_000;
        prefs.min_schools = 11;
        assert!(filter(&base, &prefs).is_empty());
    }
}
