//! Deterministic catalog generation.
//!
//! Builds the community collection as a pure function of the seed map and
//! a numeric seed: the same inputs always yield the same catalog. Value
//! ranges and per-flag probabilities follow the directory's listing
//! conventions (ratings skew high, most communities have bus access, few
//! have swimming pools).

use awaas_catalog_models::{
    Amenities, Community, ContactInfo, CrimeRate, Demographics, Infrastructure, Trend,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::registry::SeedState;

/// Communities generated for each of the first five cities of a state.
const COMMUNITIES_MAJOR_CITY: usize = 2;

/// Communities generated for the remaining cities of a state.
const COMMUNITIES_MINOR_CITY: usize = 1;

/// Name suffixes appended to the city name to form a community name.
const NAME_SUFFIXES: &[&str] = &[
    "Heights",
    "Gardens",
    "Residency",
    "Enclave",
    "Paradise",
    "Valley",
    "Plaza",
    "Towers",
    "Apartments",
    "Complex",
    "Homes",
    "Villas",
    "Estate",
    "Park",
    "Green",
    "Royal",
    "Premium",
    "Elite",
    "Grand",
    "Heritage",
];

/// Area prefixes prepended to the city name to form an area string.
const AREA_PREFIXES: &[&str] = &[
    "Central",
    "East",
    "West",
    "North",
    "South",
    "Downtown",
    "Uptown",
    "Old City",
    "New Town",
    "Commercial",
    "Residential",
    "IT Hub",
];

/// Highlight tags; each record gets a 3-6 entry prefix of this list.
const HIGHLIGHTS: &[&str] = &[
    "Safe Neighborhood",
    "Good Connectivity",
    "Family Friendly",
    "Near Metro",
    "Shopping Nearby",
    "Parks & Recreation",
];

/// Property manager names for generated contact blocks.
const MANAGER_NAMES: &[&str] = &[
    "Rajesh Kumar",
    "Priya Sharma",
    "Amit Singh",
    "Sunita Patel",
    "Vikram Reddy",
    "Kavya Nair",
    "Arjun Gupta",
    "Meera Joshi",
    "Rohit Agarwal",
    "Sneha Iyer",
    "Karthik Menon",
    "Divya Rao",
    "Suresh Chandra",
    "Lakshmi Devi",
    "Manoj Tiwari",
];

/// Stock photo URLs for generated listings.
const IMAGES: &[&str] = &[
    "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1115804/pexels-photo-1115804.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1370704/pexels-photo-1370704.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1643383/pexels-photo-1643383.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/2102587/pexels-photo-2102587.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/2581922/pexels-photo-2581922.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3288100/pexels-photo-3288100.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3935333/pexels-photo-3935333.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/4050315/pexels-photo-4050315.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/4792728/pexels-photo-4792728.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/5563473/pexels-photo-5563473.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/6186810/pexels-photo-6186810.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/7031406/pexels-photo-7031406.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/7534555/pexels-photo-7534555.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/8134848/pexels-photo-8134848.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/8134849/pexels-photo-8134849.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/8134850/pexels-photo-8134850.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/8134851/pexels-photo-8134851.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/8134852/pexels-photo-8134852.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/8134853/pexels-photo-8134853.jpeg?auto=compress&cs=tinysrgb&w=800",
];

/// Generates the full community catalog for the given seed map.
///
/// Pure with respect to its inputs: the same `(states, seed)` pair always
/// produces the same records, in the same order. Identifiers are assigned
/// sequentially (`community-1`, `community-2`, ...) across the whole run.
#[must_use]
pub fn generate_catalog(states: &[SeedState], seed: u64) -> Vec<Community> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut communities = Vec::new();
    let mut next_id: u32 = 1;

    for state in states {
        for (city_index, city) in state.cities.iter().enumerate() {
            let per_city = if city_index < 5 {
                COMMUNITIES_MAJOR_CITY
            } else {
                COMMUNITIES_MINOR_CITY
            };
            for _ in 0..per_city {
                communities.push(generate_community(&mut rng, next_id, &state.name, city));
                next_id += 1;
            }
        }
    }

    log::debug!(
        "Generated {} communities across {} states (seed {seed})",
        communities.len(),
        states.len()
    );

    communities
}

/// Generates one community record for a city.
fn generate_community(rng: &mut StdRng, id: u32, state: &str, city: &str) -> Community {
    let name = format!("{city} {}", pick(rng, NAME_SUFFIXES));
    let area = format!("{} {city}", pick(rng, AREA_PREFIXES));
    let highlight_count = rng.random_range(3..=HIGHLIGHTS.len());
    let email_local: String = name.to_lowercase().split_whitespace().collect();

    Community {
        id: format!("community-{id}"),
        name: name.clone(),
        location: area.clone(),
        city: city.to_string(),
        state: state.to_string(),
        area: area.clone(),
        image: pick(rng, IMAGES).to_string(),
        price_range: format!(
            "₹{}K - ₹{}K",
            rng.random_range(8..=35),
            rng.random_range(40..=80)
        ),
        available_rooms: rng.random_range(5..=25),
        safety_rating: rating(rng, 3.8, 5.0),
        hospitality_score: rating(rng, 3.5, 5.0),
        cleanliness_rating: rating(rng, 3.6, 4.9),
        crime_rate: CrimeRate::all()[rng.random_range(0..CrimeRate::all().len())],
        recent_crimes: rng.random_range(0..=8),
        trend: [Trend::Improving, Trend::Stable, Trend::Declining][rng.random_range(0..3)],
        is_verified: rng.random_bool(0.7),
        highlights: HIGHLIGHTS[..highlight_count]
            .iter()
            .map(ToString::to_string)
            .collect(),
        amenities: Amenities {
            schools: rng.random_range(2..=15),
            hospitals: rng.random_range(1..=8),
            banks: rng.random_range(5..=25),
            malls: rng.random_range(1..=6),
            restaurants: rng.random_range(20..=80),
            gyms: rng.random_range(3..=12),
            parks: rng.random_range(2..=8),
            pharmacy: rng.random_range(3..=10),
            supermarkets: rng.random_range(5..=15),
            atms: rng.random_range(8..=20),
            petrol_pumps: rng.random_range(2..=8),
            transport: rng.random_range(6..=10),
            wifi: rng.random_bool(0.8),
            power_backup: rng.random_bool(0.7),
            water_supply: rng.random_bool(0.9),
            security: rng.random_bool(0.75),
            cctv: rng.random_bool(0.6),
            parking: rng.random_bool(0.8),
            elevator: rng.random_bool(0.5),
            garden: rng.random_bool(0.7),
            playground: rng.random_bool(0.6),
            clubhouse: rng.random_bool(0.4),
            swimming: rng.random_bool(0.3),
            metro: rng.random_bool(0.4),
            bus: rng.random_bool(0.8),
        },
        infrastructure: Infrastructure {
            road_quality: rating(rng, 3.0, 5.0),
            water_supply: rating(rng, 3.2, 4.8),
            power_supply: rating(rng, 3.5, 4.9),
            internet_speed: rating(rng, 3.8, 5.0),
            waste_management: rating(rng, 3.0, 4.5),
            street_lights: rating(rng, 3.5, 4.8),
            drainage: rating(rng, 2.8, 4.5),
            public_transport: rating(rng, 3.2, 4.7),
        },
        demographics: Demographics {
            total_residents: rng.random_range(150..=800),
            average_age: rng.random_range(28..=45),
            family_friendly: rng.random_range(60..=95),
            student_population: rng.random_range(15..=40),
        },
        contact_info: ContactInfo {
            property_manager: pick(rng, MANAGER_NAMES).to_string(),
            phone: phone_number(rng),
            email: format!("{email_local}@properties.in"),
            whatsapp: phone_number(rng),
            address: format!("{area}, {city}, {state} {}", rng.random_range(100_000..=999_999)),
        },
    }
}

/// Draws one entry from a slice.
fn pick<'a>(rng: &mut StdRng, items: &'a [&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Draws a rating in `[min, max)` rounded to one decimal place.
fn rating(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    (rng.random_range(min..max) * 10.0).round() / 10.0
}

/// Draws an Indian mobile number in display format.
fn phone_number(rng: &mut StdRng) -> String {
    format!(
        "+91 {} {}",
        rng.random_range(90_000..=99_999),
        rng.random_range(10_000..=99_999)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::seed_states;
    use std::collections::BTreeSet;

    #[test]
    fn generation_is_deterministic() {
        let states = seed_states();
        let a = generate_catalog(&states, 7);
        let b = generate_catalog(&states, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let states = seed_states();
        let a = generate_catalog(&states, 1);
        let b = generate_catalog(&states, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn fifteen_communities_per_state() {
        let states = seed_states();
        let catalog = generate_catalog(&states, 0);
        // 5 major cities x 2 + 5 minor cities x 1.
        assert_eq!(catalog.len(), states.len() * 15);
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        let catalog = generate_catalog(&seed_states(), 0);
        let mut seen = BTreeSet::new();
        for community in &catalog {
            assert!(seen.insert(&community.id), "Duplicate id {}", community.id);
        }
        assert_eq!(catalog[0].id, "community-1");
        assert_eq!(catalog.last().unwrap().id, format!("community-{}", catalog.len()));
    }

    #[test]
    fn ratings_stay_in_nominal_ranges() {
        for community in &generate_catalog(&seed_states(), 3) {
            assert!((3.8..=5.0).contains(&community.safety_rating));
            assert!((3.5..=5.0).contains(&community.hospitality_score));
            assert!((3.6..=4.9).contains(&community.cleanliness_rating));
            assert!((6..=10).contains(&community.amenities.transport));
            assert!((2.8..=4.5).contains(&community.infrastructure.drainage));
        }
    }

    #[test]
    fn highlights_have_three_to_six_entries() {
        for community in &generate_catalog(&seed_states(), 4) {
            assert!((3..=6).contains(&community.highlights.len()));
        }
    }

    #[test]
    fn price_range_has_a_parseable_ceiling() {
        for community in &generate_catalog(&seed_states(), 5) {
            let last = community
                .price_range
                .split(|c: char| !c.is_ascii_digit())
                .filter(|s| !s.is_empty())
                .next_back()
                .unwrap();
            let ceiling: u32 = last.parse().unwrap();
            assert!((40..=80).contains(&ceiling), "{}", community.price_range);
        }
    }

    #[test]
    fn areas_belong_to_their_city() {
        for community in &generate_catalog(&seed_states(), 6) {
            assert!(
                community.area.ends_with(&community.city),
                "Area {} does not reference city {}",
                community.area,
                community.city
            );
            assert_eq!(community.location, community.area);
        }
    }
}
