//! Benchmark support utilities for similarity ranking.
//!
//! Provides deterministic destination pools so ranking timings are
//! reproducible across runs.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wayfarer_core::{Attribute, City, Country, Ratings};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Continents to cycle through when assigning countries.
const CONTINENTS: [&str; 6] = [
    "Africa",
    "Asia",
    "Europe",
    "North America",
    "Oceania",
    "South America",
];

/// Tag vocabulary shared by moods and vacation goals.
const TAGS: [&str; 10] = [
    "beach",
    "party",
    "ski",
    "food",
    "calm",
    "historic",
    "romantic",
    "nature",
    "shopping",
    "adventure",
];

/// Generate `count` countries with randomised profiles.
#[must_use]
pub fn generate_countries(count: u64, seed: u64) -> Vec<Country> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|id| {
            let continent = CONTINENTS
                .choose(&mut rng)
                .copied()
                .unwrap_or("Europe");
            let mut country = Country::new(id, format!("Country {id}")).with_continent(continent);
            country.profile = random_profile(&mut rng, country.profile);
            country
        })
        .collect()
}

/// Generate `count` cities spread across `countries` parent countries.
#[must_use]
pub fn generate_cities(count: u64, countries: u64, seed: u64) -> Vec<City> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|id| {
            let parent = rng.gen_range(0..countries.max(1));
            let mut city = City::new(id, format!("City {id}"), parent);
            city.profile = random_profile(&mut rng, city.profile);
            city
        })
        .collect()
}

fn random_profile(
    rng: &mut ChaCha8Rng,
    profile: wayfarer_core::DestinationProfile,
) -> wayfarer_core::DestinationProfile {
    let mood: Vec<&str> = TAGS.choose_multiple(rng, 3).copied().collect();
    let goals: Vec<&str> = TAGS.choose_multiple(rng, 2).copied().collect();
    let ratings = Ratings {
        overall: Some(rng.gen_range(0.0..=5.0)),
        cost: Some(rng.gen_range(0.0..=5.0)),
        safety: Some(rng.gen_range(0.0..=5.0)),
        fun: Some(rng.gen_range(0.0..=5.0)),
        food: Some(rng.gen_range(0.0..=5.0)),
    };
    let mut profile = profile
        .with_mood(mood)
        .with_vacation_goals(goals)
        .with_ratings(ratings)
        .with_weekly_budget(rng.gen_range(200.0..4_000.0));
    for attribute in Attribute::ALL {
        if rng.gen_bool(0.5) {
            profile = profile.with_attribute(attribute, rng.gen_bool(0.5));
        }
    }
    profile
}
