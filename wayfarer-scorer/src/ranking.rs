//! Rank candidate destinations by similarity to a target.

#![forbid(unsafe_code)]

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};
use wayfarer_core::{
    City, CityContext, Country, DestinationId, DestinationStore, Similar, SimilarityScorer,
};

use crate::{DestinationScorer, SimilarityError};

/// Number of results returned when no limit is supplied.
pub const DEFAULT_LIMIT: usize = 12;

/// Scores at or below this value are dropped from rankings.
pub const MIN_SIMILARITY: f32 = 0.05;

/// Knobs applied after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingOptions {
    /// Maximum number of results. `0` yields an empty ranking.
    pub limit: usize,
    /// Candidates must score strictly above this threshold.
    pub min_similarity: f32,
}

impl RankingOptions {
    /// Validate the options and return a copy.
    ///
    /// # Errors
    /// Returns [`SimilarityError::InvalidMinSimilarity`] when the threshold
    /// is not a finite value within `0.0..=1.0`. A `NaN` threshold would
    /// otherwise reject every candidate.
    pub fn validate(self) -> Result<Self, SimilarityError> {
        if (0.0..=1.0).contains(&self.min_similarity) {
            Ok(self)
        } else {
            Err(SimilarityError::InvalidMinSimilarity {
                value: self.min_similarity,
            })
        }
    }

    /// Replace the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the minimum similarity threshold.
    #[must_use]
    pub const fn with_min_similarity(mut self, min_similarity: f32) -> Self {
        self.min_similarity = min_similarity;
        self
    }
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_similarity: MIN_SIMILARITY,
        }
    }
}

/// Ranks a candidate pool against a target using any [`SimilarityScorer`].
///
/// Rankings exclude the target by identifier, keep candidates scoring above
/// [`RankingOptions::min_similarity`], order them by descending similarity
/// with ties in input order, and truncate to [`RankingOptions::limit`].
///
/// # Examples
/// ```
/// use wayfarer_core::Country;
/// use wayfarer_scorer::{DestinationScorer, SimilarityRanker};
///
/// let countries = vec![
///     Country::new(1, "Japan").with_continent("Asia"),
///     Country::new(2, "Korea").with_continent("Asia"),
///     Country::new(3, "Peru").with_continent("South America"),
/// ];
/// let ranker = SimilarityRanker::new(DestinationScorer::default()).with_limit(1);
/// let ranked = ranker.similar_countries(&countries[0], &countries);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].entity.name, "Korea");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimilarityRanker<S = DestinationScorer> {
    scorer: S,
    options: RankingOptions,
}

impl<S: SimilarityScorer> SimilarityRanker<S> {
    /// Create a ranker with default options.
    #[must_use]
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            options: RankingOptions::default(),
        }
    }

    /// Replace every ranking option.
    #[must_use]
    pub const fn with_options(mut self, options: RankingOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.options.limit = limit;
        self
    }

    /// Options in use.
    #[must_use]
    pub const fn options(&self) -> &RankingOptions {
        &self.options
    }

    /// Scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank `pool` by similarity to `target`.
    ///
    /// The target need not be a member of `pool`.
    #[must_use]
    pub fn similar_countries<'a>(
        &self,
        target: &Country,
        pool: &'a [Country],
    ) -> Vec<Similar<&'a Country>> {
        if pool.is_empty() {
            debug!("no countries to rank against country {}", target.id);
            return Vec::new();
        }
        let scored = pool
            .iter()
            .filter(|candidate| candidate.id != target.id)
            .map(|candidate| {
                Similar::new(candidate, self.scorer.country_similarity(target, candidate))
            })
            .collect();
        self.select(scored)
    }

    /// Rank `cities` by similarity to `target`.
    ///
    /// Candidate parent countries are resolved against `countries`; candidates
    /// whose country is unknown are left out of the ranking. When
    /// `target_country` is `None` the target's country is looked up in
    /// `countries` as well.
    #[must_use]
    pub fn similar_cities<'a>(
        &self,
        target: &City,
        target_country: Option<&Country>,
        cities: &'a [City],
        countries: &'a [Country],
    ) -> Vec<Similar<&'a City>> {
        if cities.is_empty() || countries.is_empty() {
            debug!(
                "no cities or countries to rank against city {} ({} cities, {} countries)",
                target.id,
                cities.len(),
                countries.len()
            );
            return Vec::new();
        }
        let index: HashMap<DestinationId, &Country> = countries
            .iter()
            .map(|country| (country.id, country))
            .collect();
        self.rank_cities(target, target_country, cities, |id| index.get(&id).copied())
    }

    /// Rank every country in `store` by similarity to `target`.
    #[must_use]
    pub fn similar_countries_in<'a, D>(
        &self,
        target: &Country,
        store: &'a D,
    ) -> Vec<Similar<&'a Country>>
    where
        D: DestinationStore + ?Sized,
    {
        self.similar_countries(target, store.countries())
    }

    /// Rank every city in `store` by similarity to `target`, resolving
    /// parent countries through the store.
    #[must_use]
    pub fn similar_cities_in<'a, D>(&self, target: &City, store: &'a D) -> Vec<Similar<&'a City>>
    where
        D: DestinationStore + ?Sized,
    {
        if store.cities().is_empty() || store.countries().is_empty() {
            debug!(
                "store holds no cities or countries to rank against city {}",
                target.id
            );
            return Vec::new();
        }
        self.rank_cities(target, None, store.cities(), |id| store.country(id))
    }

    fn rank_cities<'a, F>(
        &self,
        target: &City,
        target_country: Option<&Country>,
        cities: &'a [City],
        resolve: F,
    ) -> Vec<Similar<&'a City>>
    where
        F: Fn(DestinationId) -> Option<&'a Country>,
    {
        let target_context =
            CityContext::new(target, target_country.or_else(|| resolve(target.country)));
        let mut unresolved = 0_usize;
        let scored = cities
            .iter()
            .filter(|candidate| candidate.id != target.id)
            .filter_map(|candidate| {
                let Some(country) = resolve(candidate.country) else {
                    unresolved += 1;
                    return None;
                };
                let context = CityContext::new(candidate, Some(country));
                Some(Similar::new(
                    candidate,
                    self.scorer.city_similarity(&target_context, &context),
                ))
            })
            .collect();
        if unresolved > 0 {
            debug!(
                "left {unresolved} cities without a known country out of the ranking for city {}",
                target.id
            );
        }
        self.select(scored)
    }

    fn select<T>(&self, mut scored: Vec<Similar<T>>) -> Vec<Similar<T>> {
        let RankingOptions {
            limit,
            min_similarity,
        } = self.options;
        scored.retain(|candidate| candidate.similarity > min_similarity);
        scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        scored.truncate(limit);
        scored
    }
}

/// Rank `all_countries` against `target` with default weights and threshold.
///
/// # Examples
/// ```
/// use wayfarer_core::Country;
/// use wayfarer_scorer::get_similar_countries;
///
/// let countries = vec![Country::new(1, "Chile"), Country::new(2, "Peru")];
/// let ranked = get_similar_countries(&countries[0], &countries, 12);
/// assert_eq!(ranked.len(), 1);
/// assert!(ranked[0].match_percent() > 0);
/// ```
#[must_use]
pub fn get_similar_countries<'a>(
    target: &Country,
    all_countries: &'a [Country],
    limit: usize,
) -> Vec<Similar<&'a Country>> {
    SimilarityRanker::new(DestinationScorer::default())
        .with_limit(limit)
        .similar_countries(target, all_countries)
}

/// Rank `all_cities` against `target` with default weights and threshold.
///
/// Cities whose country is missing from `all_countries` are excluded.
#[must_use]
pub fn get_similar_cities<'a>(
    target: &City,
    target_country: Option<&Country>,
    all_cities: &'a [City],
    all_countries: &'a [Country],
    limit: usize,
) -> Vec<Similar<&'a City>> {
    SimilarityRanker::new(DestinationScorer::default())
        .with_limit(limit)
        .similar_cities(target, target_country, all_cities, all_countries)
}
