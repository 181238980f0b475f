//! Interactive four-step search wizard.
//!
//! Mirrors the directory's search flow: location + free text, budget and
//! safety, amenities and facilities, infrastructure quality. Every prompt
//! defaults to "no constraint" so enter-through-everything reproduces an
//! unfiltered search, with one exception: the budget prompt starts at the
//! conventional ₹30,000 ceiling, like the original search form.

use awaas_catalog::CatalogStore;
use awaas_search::LocationSelection;
use awaas_search_models::{CrimeRateFilter, SearchPreferences};
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Budget the wizard starts from, in rupees.
const DEFAULT_BUDGET: u32 = 30_000;

/// Facility labels, in preference-field order.
const FACILITIES: &[&str] = &[
    "WiFi",
    "Power backup",
    "Water supply",
    "Security",
    "CCTV",
    "Parking",
    "Elevator",
    "Garden",
    "Playground",
    "Clubhouse",
    "Swimming pool",
    "Metro access",
    "Bus access",
];

/// Runs the wizard and returns the free-text query plus the preferences.
///
/// # Errors
///
/// Returns an error if a terminal prompt fails.
pub fn run(store: &CatalogStore) -> Result<(String, SearchPreferences), Box<dyn std::error::Error>> {
    let mut preferences = SearchPreferences::default();

    // Step 1: location.
    println!("Step 1 of 4: location");
    let query: String = Input::new()
        .with_prompt("Search by community name or location (blank for all)")
        .allow_empty(true)
        .interact_text()?;

    let selection = prompt_location(store)?;
    selection.apply(&mut preferences);

    // Step 2: budget & safety.
    println!();
    println!("Step 2 of 4: budget & safety");
    preferences.max_budget = Input::new()
        .with_prompt("Maximum monthly budget (₹)")
        .default(DEFAULT_BUDGET)
        .interact_text()?;
    preferences.min_safety = Input::new()
        .with_prompt("Minimum safety rating (0-5)")
        .default(0.0)
        .interact_text()?;
    preferences.min_hospitality = Input::new()
        .with_prompt("Minimum hospitality score (0-5)")
        .default(0.0)
        .interact_text()?;

    let crime_options = ["Any", "Low", "Medium", "High"];
    let crime_index = Select::new()
        .with_prompt("Crime-rate category (exact match)")
        .items(&crime_options)
        .default(0)
        .interact()?;
    preferences.crime_rate = match crime_index {
        1 => CrimeRateFilter::Low,
        2 => CrimeRateFilter::Medium,
        3 => CrimeRateFilter::High,
        _ => CrimeRateFilter::All,
    };

    preferences.verified_only = Confirm::new()
        .with_prompt("Only verified communities?")
        .default(false)
        .interact()?;

    // Step 3: amenities & facilities.
    println!();
    println!("Step 3 of 4: amenities & facilities");
    preferences.min_schools = prompt_minimum("Minimum schools nearby")?;
    preferences.min_hospitals = prompt_minimum("Minimum hospitals nearby")?;
    preferences.min_banks = prompt_minimum("Minimum banks nearby")?;
    preferences.min_malls = prompt_minimum("Minimum malls nearby")?;
    preferences.min_parks = prompt_minimum("Minimum parks nearby")?;
    preferences.min_transport = prompt_minimum("Minimum transport score (0-10)")?;

    let required = MultiSelect::new()
        .with_prompt("Required facilities (space to toggle, enter to continue)")
        .items(FACILITIES)
        .interact()?;
    for index in required {
        set_facility(&mut preferences, index);
    }

    // Step 4: infrastructure.
    println!();
    println!("Step 4 of 4: infrastructure quality (0-5 minimums)");
    preferences.min_road_quality = prompt_score("Road quality")?;
    preferences.min_water_supply = prompt_score("Water supply")?;
    preferences.min_power_supply = prompt_score("Power supply")?;
    preferences.min_internet_speed = prompt_score("Internet speed")?;
    preferences.min_waste_management = prompt_score("Waste management")?;
    preferences.min_street_lights = prompt_score("Street lights")?;
    preferences.min_drainage = prompt_score("Drainage")?;
    preferences.min_public_transport = prompt_score("Public transport")?;

    Ok((query, preferences))
}

/// Cascading state → city → area selection.
fn prompt_location(store: &CatalogStore) -> Result<LocationSelection, Box<dyn std::error::Error>> {
    let mut selection = LocationSelection::new();

    let mut state_options = vec!["Any state".to_string()];
    state_options.extend(store.states());
    let state_index = Select::new()
        .with_prompt("State")
        .items(&state_options)
        .default(0)
        .interact()?;
    if state_index == 0 {
        return Ok(selection);
    }
    selection.set_state(store, &state_options[state_index]);

    let mut city_options = vec!["Any city".to_string()];
    city_options.extend(selection.available_cities().iter().cloned());
    let city_index = Select::new()
        .with_prompt("City")
        .items(&city_options)
        .default(0)
        .interact()?;
    if city_index == 0 {
        return Ok(selection);
    }
    selection.set_city(store, &city_options[city_index]);

    if selection.available_areas().is_empty() {
        return Ok(selection);
    }
    let mut area_options = vec!["All areas".to_string()];
    area_options.extend(selection.available_areas().iter().cloned());
    let area_index = Select::new()
        .with_prompt("Area")
        .items(&area_options)
        .default(0)
        .interact()?;
    if area_index > 0 {
        selection.set_area(&area_options[area_index]);
    }

    Ok(selection)
}

/// Prompts for a count minimum, defaulting to no constraint.
fn prompt_minimum(prompt: &str) -> Result<u32, Box<dyn std::error::Error>> {
    Ok(Input::new().with_prompt(prompt).default(0).interact_text()?)
}

/// Prompts for a 0-5 score minimum, defaulting to no constraint.
fn prompt_score(prompt: &str) -> Result<f64, Box<dyn std::error::Error>> {
    Ok(Input::new().with_prompt(prompt).default(0.0).interact_text()?)
}

/// Marks one facility as required, by [`FACILITIES`] index.
fn set_facility(preferences: &mut SearchPreferences, index: usize) {
    match index {
        0 => preferences.wifi_required = true,
        1 => preferences.power_backup_required = true,
        2 => preferences.water_supply_required = true,
        3 => preferences.security_required = true,
        4 => preferences.cctv_required = true,
        5 => preferences.parking_required = true,
        6 => preferences.elevator_required = true,
        7 => preferences.garden_required = true,
        8 => preferences.playground_required = true,
        9 => preferences.clubhouse_required = true,
        10 => preferences.swimming_required = true,
        11 => preferences.metro_required = true,
        12 => preferences.bus_required = true,
        _ => {}
    }
}
