//! Core domain types for the Wayfarer similarity engine.
//!
//! The crate models the destinations the engine compares (countries and
//! cities), the attributes that feed similarity scoring, and the seams the
//! scorer and ranking layers plug into:
//!
//! - [`SimilarityScorer`] assigns a `0.0..=1.0` similarity to a pair of
//!   destinations of the same kind.
//! - [`DestinationStore`] is the read-only data-access layer the ranking
//!   entry points draw their candidate pools from. [`Catalog`] is the
//!   validated in-memory implementation.
//!
//! Ratings are stored on the canonical `0..=5` scale described by
//! [`RATING_SCALE_MAX`]; data held on other scales is converted at the
//! boundary with [`Ratings::rescaled`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attributes;
pub mod destination;
pub mod ratings;
pub mod scorer;
pub mod similar;
pub mod store;
pub mod tags;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attributes::{Attribute, Attributes, ParseAttributeError};
pub use destination::{
    City, Country, Destination, DestinationId, DestinationKind, DestinationProfile, slugify,
};
pub use ratings::{RATING_SCALE_MAX, RatingScale, Ratings};
pub use scorer::{CityContext, SimilarityScorer};
pub use similar::Similar;
pub use store::{Catalog, CatalogError, DestinationStore};
pub use tags::TagSet;
