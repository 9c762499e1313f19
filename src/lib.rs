//! Facade crate for the Wayfarer destination similarity engine.
//!
//! This crate re-exports the core domain types and, behind the `scorer`
//! feature, the default scorer and ranking entry points.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "scorer")]
//! # {
//! use wayfarer_engine::{Country, get_similar_countries};
//!
//! let countries = vec![
//!     Country::new(1, "Thailand").with_continent("Asia").with_mood(["beach"]),
//!     Country::new(2, "Vietnam").with_continent("Asia").with_mood(["beach"]),
//!     Country::new(3, "Austria").with_continent("Europe").with_mood(["ski"]),
//! ];
//! let ranked = get_similar_countries(&countries[0], &countries, 12);
//! assert_eq!(ranked.first().map(|hit| hit.entity.id), Some(2));
//! # }
//! ```

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Attribute, Attributes, Catalog, CatalogError, City, CityContext, Country, Destination,
    DestinationId, DestinationKind, DestinationProfile, DestinationStore, RATING_SCALE_MAX,
    RatingScale, Ratings, Similar, SimilarityScorer, TagSet, slugify,
};

#[cfg(feature = "test-support")]
pub use wayfarer_core::test_support::FixedScorer;

#[cfg(feature = "scorer")]
pub use wayfarer_scorer::{
    DEFAULT_LIMIT, DestinationScorer, MIN_SIMILARITY, RankingOptions, SetOverlap,
    SimilarityBreakdown, SimilarityError, SimilarityRanker, SimilarityWeights,
    get_similar_cities, get_similar_countries,
};
