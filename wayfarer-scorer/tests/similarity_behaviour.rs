#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for similarity ranking.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfarer_core::{City, Country, DestinationId};
use wayfarer_scorer::{DEFAULT_LIMIT, get_similar_cities, get_similar_countries};

const BEACH: DestinationId = 1;
const PARTY: DestinationId = 2;
const SKI: DestinationId = 3;
const KYOTO: DestinationId = 10;
const OSAKA: DestinationId = 11;
const ORPHAN: DestinationId = 99;

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    countries: RefCell<Vec<Country>>,
    cities: RefCell<Vec<City>>,
    ranking: RefCell<Option<Vec<DestinationId>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        countries: RefCell::new(Vec::new()),
        cities: RefCell::new(Vec::new()),
        ranking: RefCell::new(None),
    }
}

#[given("a beach country in Asia")]
fn beach_country(context: &TestContext) {
    context.countries.borrow_mut().push(
        Country::new(BEACH, "Thailand")
            .with_continent("Asia")
            .with_mood(["beach", "affordable"])
            .with_weekly_budget(800.0),
    );
}

#[given("a party country in Asia")]
fn party_country(context: &TestContext) {
    context.countries.borrow_mut().push(
        Country::new(PARTY, "Vietnam")
            .with_continent("Asia")
            .with_mood(["beach", "party"])
            .with_weekly_budget(900.0),
    );
}

#[given("a ski country in Europe")]
fn ski_country(context: &TestContext) {
    context.countries.borrow_mut().push(
        Country::new(SKI, "Austria")
            .with_continent("Europe")
            .with_mood(["ski"]),
    );
}

#[given("cities in Japan and Thailand")]
fn japan_and_thailand(context: &TestContext) {
    context.countries.borrow_mut().extend([
        Country::new(100, "Japan").with_continent("Asia"),
        Country::new(200, "Thailand").with_continent("Asia"),
    ]);
    context.cities.borrow_mut().extend([
        City::new(KYOTO, "Kyoto", 100).with_mood(["historic", "calm"]),
        City::new(20, "Bangkok", 200).with_mood(["nightlife", "food"]),
        City::new(OSAKA, "Osaka", 100).with_mood(["food", "historic"]),
    ]);
}

#[given("a city whose country is unknown")]
fn orphan_city(context: &TestContext) {
    context
        .cities
        .borrow_mut()
        .push(City::new(ORPHAN, "Atlantis", 404).with_mood(["historic", "calm"]));
}

#[when("I rank countries similar to the beach country")]
fn rank_countries(context: &TestContext) {
    rank_beach_country(context, DEFAULT_LIMIT);
}

#[when("I rank countries similar to the beach country with a limit of zero")]
fn rank_countries_without_limit(context: &TestContext) {
    rank_beach_country(context, 0);
}

#[when("I rank cities similar to Kyoto")]
fn rank_cities(context: &TestContext) {
    let countries = context.countries.borrow();
    let cities = context.cities.borrow();
    let kyoto = cities
        .iter()
        .find(|city| city.id == KYOTO)
        .expect("kyoto in scenario");
    let ranked = get_similar_cities(kyoto, None, &cities, &countries, DEFAULT_LIMIT);
    record_ranking(context, ranked.iter().map(|hit| hit.entity.id).collect());
}

#[then("the party country ranks above the ski country")]
fn party_above_ski(context: &TestContext) {
    let ranking = ranking(context);
    let party = position(&ranking, PARTY);
    let ski = position(&ranking, SKI);
    assert!(party < ski, "expected party before ski in {ranking:?}");
}

#[then("the beach country is not in the ranking")]
fn beach_excluded(context: &TestContext) {
    assert!(!ranking(context).contains(&BEACH));
}

#[then("Osaka ranks first")]
fn osaka_first(context: &TestContext) {
    assert_eq!(ranking(context).first(), Some(&OSAKA));
}

#[then("the city with an unknown country is not in the ranking")]
fn orphan_excluded(context: &TestContext) {
    assert!(!ranking(context).contains(&ORPHAN));
}

#[then("the ranking is empty")]
fn ranking_empty(context: &TestContext) {
    assert!(ranking(context).is_empty());
}

fn rank_beach_country(context: &TestContext, limit: usize) {
    let countries = context.countries.borrow();
    let target = countries
        .iter()
        .find(|country| country.id == BEACH)
        .expect("beach country in scenario");
    let ranked = get_similar_countries(target, &countries, limit);
    record_ranking(context, ranked.iter().map(|hit| hit.entity.id).collect());
}

fn record_ranking(context: &TestContext, ids: Vec<DestinationId>) {
    *context.ranking.borrow_mut() = Some(ids);
}

fn ranking(context: &TestContext) -> Vec<DestinationId> {
    context
        .ranking
        .borrow()
        .clone()
        .expect("ranking recorded by a when step")
}

fn position(ranking: &[DestinationId], id: DestinationId) -> usize {
    ranking
        .iter()
        .position(|candidate| *candidate == id)
        .expect("destination present in ranking")
}

#[scenario(path = "tests/features/similarity.feature", index = 0)]
fn shared_continent_and_mood_rank_first(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/similarity.feature", index = 1)]
fn orphan_cities_are_left_out(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/similarity.feature", index = 2)]
fn zero_limit_yields_empty_ranking(context: TestContext) {
    let _ = context;
}
