//! Similarity scoring and ranking for Wayfarer destinations.
//!
//! The crate provides two layers on top of `wayfarer-core`:
//! - **Pairwise scoring**: [`DestinationScorer`] implements
//!   [`SimilarityScorer`](wayfarer_core::SimilarityScorer) as a weighted,
//!   additive combination of geography, mood and vacation-goal overlap,
//!   rating closeness, budget closeness and attribute agreement. The raw sum
//!   is passed through [`compress_score`] so even weak matches show a
//!   meaningful percentage. [`SimilarityBreakdown`] exposes every term.
//! - **Ranking**: [`SimilarityRanker`] scores a candidate pool against a
//!   target, drops the target and degenerate scores, and returns the top
//!   results in descending order. [`get_similar_countries`] and
//!   [`get_similar_cities`] wrap it with the default configuration.
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::{City, Country};
//! use wayfarer_scorer::get_similar_cities;
//!
//! let countries = vec![
//!     Country::new(1, "Japan").with_continent("Asia"),
//!     Country::new(2, "Thailand").with_continent("Asia"),
//! ];
//! let cities = vec![
//!     City::new(10, "Kyoto", 1).with_mood(["historic", "calm"]),
//!     City::new(11, "Osaka", 1).with_mood(["food", "nightlife"]),
//!     City::new(20, "Chiang Mai", 2).with_mood(["historic", "calm"]),
//!     City::new(30, "Atlantis", 99),
//! ];
//!
//! let ranked = get_similar_cities(&cities[0], Some(&countries[0]), &cities, &countries, 12);
//! let names: Vec<_> = ranked.iter().map(|hit| hit.entity.name.as_str()).collect();
//! assert_eq!(names, ["Chiang Mai", "Osaka"]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod pairwise;
mod primitives;
mod ranking;
mod weights;

pub use error::SimilarityError;
pub use pairwise::{DestinationScorer, GeographyMatch, SimilarityBreakdown};
pub use primitives::{
    BUDGET_CEILING, SetOverlap, attribute_similarity, budget_similarity, compress_score,
    jaccard_score, rating_similarity, set_overlap_score,
};
pub use ranking::{
    DEFAULT_LIMIT, MIN_SIMILARITY, RankingOptions, SimilarityRanker, get_similar_cities,
    get_similar_countries,
};
pub use weights::SimilarityWeights;
