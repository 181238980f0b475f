#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line search for the awaas directory.
//!
//! `awaas search` walks through the same four preference steps as the web
//! wizard (location, budget & safety, amenities & facilities,
//! infrastructure) and runs the filter engine over a locally generated
//! catalog. `awaas quick` takes the common filters as flags instead.

mod wizard;

use awaas_catalog::CatalogStore;
use awaas_catalog_models::Community;
use awaas_search_models::{CrimeRateFilter, SearchPreferences};
use clap::{Parser, Subcommand};
use console::style;

/// Catalog seed used when `--seed` is not given.
const DEFAULT_SEED: u64 = 2024;

#[derive(Parser)]
#[command(name = "awaas", about = "Community directory search")]
struct Cli {
    /// Catalog generation seed; the same seed always yields the same
    /// catalog.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive four-step search wizard
    Search,
    /// One-shot search from flags
    Quick {
        /// Free-text search term
        #[arg(long)]
        query: Option<String>,
        /// Exact state filter
        #[arg(long)]
        state: Option<String>,
        /// Exact city filter
        #[arg(long)]
        city: Option<String>,
        /// Maximum monthly budget in rupees
        #[arg(long)]
        max_budget: Option<u32>,
        /// Minimum safety rating (0-5)
        #[arg(long)]
        min_safety: Option<f64>,
        /// Crime-rate category (all, Low, Medium, High)
        #[arg(long)]
        crime_rate: Option<CrimeRateFilter>,
        /// Only verified listings
        #[arg(long)]
        verified: bool,
    },
    /// List all states
    States,
    /// List the cities of a state
    Cities {
        /// State name
        state: String,
    },
    /// Show one community in full
    Show {
        /// Community identifier (e.g. community-42)
        id: String,
    },
    /// Catalog summary statistics
    Stats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let store = CatalogStore::generate(cli.seed.unwrap_or(DEFAULT_SEED));

    match cli.command {
        Commands::Search => {
            let (query, preferences) = wizard::run(&store)?;
            run_search(&store, &query, &preferences);
        }
        Commands::Quick {
            query,
            state,
            city,
            max_budget,
            min_safety,
            crime_rate,
            verified,
        } => {
            let mut preferences = SearchPreferences::default();
            if let Some(state) = state {
                preferences.state = state;
            }
            if let Some(city) = city {
                preferences.city = city;
            }
            if let Some(max_budget) = max_budget {
                preferences.max_budget = max_budget;
            }
            if let Some(min_safety) = min_safety {
                preferences.min_safety = min_safety;
            }
            if let Some(crime_rate) = crime_rate {
                preferences.crime_rate = crime_rate;
            }
            preferences.verified_only = verified;
            run_search(&store, &query.unwrap_or_default(), &preferences);
        }
        Commands::States => {
            for state in store.states() {
                println!("{state}");
            }
        }
        Commands::Cities { state } => {
            let cities = store.cities_for_state(&state);
            if cities.is_empty() {
                println!("No cities found for {state}");
            }
            for city in cities {
                println!("{city}");
            }
        }
        Commands::Show { id } => match store.find_by_id(&id) {
            Some(community) => print_detail(community),
            None => println!("No community with id {id}"),
        },
        Commands::Stats => print_stats(&store),
    }

    Ok(())
}

/// Runs the engine and prints the result listing.
fn run_search(store: &CatalogStore, query: &str, preferences: &SearchPreferences) {
    let base = store.text_search(query);
    log::debug!("text search for {query:?} matched {} communities", base.len());
    let results = awaas_search::filter(&base, preferences);

    println!();
    println!(
        "Found {} of {} communities",
        style(results.len()).green().bold(),
        store.len()
    );
    println!();

    for community in results {
        print_summary(community);
    }
}

/// One listing line per community.
fn print_summary(community: &Community) {
    let verified = if community.is_verified {
        style(" ✓").green().to_string()
    } else {
        String::new()
    };
    println!(
        "{}{}  {}",
        style(&community.name).bold(),
        verified,
        style(format!("({}, {})", community.city, community.state)).dim()
    );
    println!(
        "  {}  safety {:.1}  crime {}  {} rooms",
        community.price_range,
        community.safety_rating,
        community.crime_rate,
        community.available_rooms
    );
}

/// Full detail view for `awaas show`.
fn print_detail(community: &Community) {
    println!("{}", style(&community.name).bold());
    println!("{}, {}, {}", community.area, community.city, community.state);
    println!();
    println!("Price range:     {}", community.price_range);
    println!("Available rooms: {}", community.available_rooms);
    println!("Safety:          {:.1}/5", community.safety_rating);
    println!("Hospitality:     {:.1}/5", community.hospitality_score);
    println!("Cleanliness:     {:.1}/5", community.cleanliness_rating);
    println!(
        "Crime rate:      {} ({} recent, {})",
        community.crime_rate, community.recent_crimes, community.trend
    );
    println!(
        "Verified:        {}",
        if community.is_verified { "yes" } else { "no" }
    );
    println!("Highlights:      {}", community.highlights.join(", "));
    println!();
    let a = &community.amenities;
    println!(
        "Nearby: {} schools, {} hospitals, {} banks, {} malls, {} restaurants, \
         {} gyms, {} parks, transport {}/10",
        a.schools, a.hospitals, a.banks, a.malls, a.restaurants, a.gyms, a.parks, a.transport
    );
    let infra = &community.infrastructure;
    println!(
        "Infrastructure: roads {:.1}, water {:.1}, power {:.1}, internet {:.1}, drainage {:.1}",
        infra.road_quality,
        infra.water_supply,
        infra.power_supply,
        infra.internet_speed,
        infra.drainage
    );
    println!();
    let contact = &community.contact_info;
    println!("Manager: {} ({})", contact.property_manager, contact.phone);
    println!("Address: {}", contact.address);
}

/// Catalog summary for `awaas stats`.
fn print_stats(store: &CatalogStore) {
    let communities = store.communities();
    let verified = communities.iter().filter(|c| c.is_verified).count();
    #[allow(clippy::cast_precision_loss)]
    let avg_safety =
        communities.iter().map(|c| c.safety_rating).sum::<f64>() / communities.len() as f64;

    println!("States:      {}", store.states().len());
    println!("Cities:      {}", store.all_cities().len());
    println!("Communities: {}", store.len());
    println!("Verified:    {verified}");
    println!("Avg safety:  {avg_safety:.2}/5");
}
