//! Pairwise similarity between two countries or two cities.
//!
//! Both comparisons share every term except geography: countries match on
//! continent, cities on parent country first and continent second.

#![forbid(unsafe_code)]

use log::trace;
use serde::Serialize;
use wayfarer_core::{CityContext, Country, DestinationProfile, SimilarityScorer};

use crate::{
    SetOverlap, SimilarityError, SimilarityWeights, attribute_similarity, budget_similarity,
    compress_score, rating_similarity,
};

/// Geography tier reached by a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeographyMatch {
    /// No shared country or continent.
    #[default]
    None,
    /// Shared continent. For cities this means different countries on the
    /// same continent.
    SameContinent,
    /// Cities in the same country.
    SameCountry,
}

/// Weighted contribution of every similarity term for one comparison.
///
/// Each field already has its weight applied, so [`raw`](Self::raw) is a
/// plain sum and [`score`](Self::score) is the value rankings use.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SimilarityBreakdown {
    /// Geography tier the pair reached.
    pub geography_match: GeographyMatch,
    /// Unconditional base bonus.
    pub base: f32,
    /// Continent or country term.
    pub geography: f32,
    /// Bonus stacked on a geography match.
    pub geography_bonus: f32,
    /// Mood overlap term.
    pub mood: f32,
    /// Bonus for strong mood overlap.
    pub mood_bonus: f32,
    /// Vacation-goal overlap term.
    pub vacation_goal: f32,
    /// Rating closeness term.
    pub ratings: f32,
    /// Budget closeness term, zero unless both budgets are known.
    pub budget: f32,
    /// Attribute agreement term, zero unless an attribute is comparable.
    pub attributes: f32,
}

impl SimilarityBreakdown {
    /// Sum of all weighted terms before compression.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the raw score is an additive combination of terms"
    )]
    pub fn raw(&self) -> f32 {
        self.base
            + self.geography
            + self.geography_bonus
            + self.mood
            + self.mood_bonus
            + self.vacation_goal
            + self.ratings
            + self.budget
            + self.attributes
    }

    /// Compressed similarity in `0.0..=1.0`.
    #[must_use]
    pub fn score(&self) -> f32 {
        compress_score(self.raw())
    }
}

/// Default [`SimilarityScorer`] combining geography, tags, ratings, budget
/// and attributes.
///
/// # Examples
/// ```
/// use wayfarer_core::{Country, SimilarityScorer};
/// use wayfarer_scorer::DestinationScorer;
///
/// let scorer = DestinationScorer::default();
/// let thailand = Country::new(1, "Thailand")
///     .with_continent("Asia")
///     .with_mood(["beach", "affordable"]);
/// let vietnam = Country::new(2, "Vietnam")
///     .with_continent("Asia")
///     .with_mood(["beach", "party"]);
/// let iceland = Country::new(3, "Iceland").with_continent("Europe");
///
/// assert!(
///     scorer.country_similarity(&thailand, &vietnam)
///         > scorer.country_similarity(&thailand, &iceland)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DestinationScorer {
    weights: SimilarityWeights,
    overlap: SetOverlap,
}

impl DestinationScorer {
    /// Build a scorer from custom weights.
    ///
    /// # Errors
    /// Returns [`SimilarityError`] when the weights fail
    /// [`SimilarityWeights::validate`].
    pub fn new(weights: SimilarityWeights) -> Result<Self, SimilarityError> {
        Ok(Self {
            weights: weights.validate()?,
            overlap: SetOverlap::default(),
        })
    }

    /// Replace the set-similarity formula used for mood and vacation goals.
    #[must_use]
    pub const fn with_set_overlap(mut self, overlap: SetOverlap) -> Self {
        self.overlap = overlap;
        self
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    /// Set-similarity formula in use.
    #[must_use]
    pub const fn set_overlap(&self) -> SetOverlap {
        self.overlap
    }

    /// Break down the similarity of two countries term by term.
    ///
    /// Continents must be present, non-empty and exactly equal to match.
    #[must_use]
    pub fn explain_country(&self, target: &Country, candidate: &Country) -> SimilarityBreakdown {
        let continents = (target.continent.as_deref(), candidate.continent.as_deref());
        let geography = if continents_match(continents.0, continents.1) {
            Geography {
                matched: GeographyMatch::SameContinent,
                weight: self.weights.continent,
                bonus: self.weights.continent_bonus,
            }
        } else {
            Geography::NONE
        };
        self.breakdown(&target.profile, &candidate.profile, geography)
    }

    /// Break down the similarity of two cities term by term.
    ///
    /// Sharing a parent country takes precedence over sharing a continent.
    /// The continent tier needs both parent countries resolved.
    #[must_use]
    pub fn explain_city(
        &self,
        target: &CityContext<'_>,
        candidate: &CityContext<'_>,
    ) -> SimilarityBreakdown {
        let geography = if target.city.country == candidate.city.country {
            Geography {
                matched: GeographyMatch::SameCountry,
                weight: self.weights.same_country,
                bonus: self.weights.same_country_bonus,
            }
        } else if continents_match(target.continent(), candidate.continent()) {
            Geography {
                matched: GeographyMatch::SameContinent,
                weight: self.weights.shared_continent,
                bonus: self.weights.shared_continent_bonus,
            }
        } else {
            Geography::NONE
        };
        self.breakdown(&target.city.profile, &candidate.city.profile, geography)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "each term scales a unit similarity by its weight"
    )]
    fn breakdown(
        &self,
        target: &DestinationProfile,
        candidate: &DestinationProfile,
        geography: Geography,
    ) -> SimilarityBreakdown {
        let weights = &self.weights;
        let mood_overlap = self
            .overlap
            .score(&target.mood_tags(), &candidate.mood_tags());
        let goal_overlap = self
            .overlap
            .score(&target.vacation_goal_tags(), &candidate.vacation_goal_tags());
        let mood_bonus = if mood_overlap > weights.mood_bonus_threshold {
            weights.mood_bonus
        } else {
            0.0
        };

        SimilarityBreakdown {
            geography_match: geography.matched,
            base: weights.base_bonus,
            geography: geography.weight,
            geography_bonus: geography.bonus,
            mood: weights.mood * mood_overlap,
            mood_bonus,
            vacation_goal: weights.vacation_goal * goal_overlap,
            ratings: weights.ratings * rating_similarity(&target.ratings, &candidate.ratings),
            budget: budget_similarity(target.weekly_budget, candidate.weekly_budget)
                .map_or(0.0, |similarity| weights.budget * similarity),
            attributes: attribute_similarity(&target.attributes, &candidate.attributes)
                .map_or(0.0, |similarity| weights.attributes * similarity),
        }
    }
}

impl SimilarityScorer for DestinationScorer {
    fn country_similarity(&self, target: &Country, candidate: &Country) -> f32 {
        let breakdown = self.explain_country(target, candidate);
        let score = Self::sanitise(breakdown.score());
        trace!(
            "country {} vs {}: raw {:.4} score {score:.4}",
            target.id,
            candidate.id,
            breakdown.raw()
        );
        score
    }

    fn city_similarity(&self, target: &CityContext<'_>, candidate: &CityContext<'_>) -> f32 {
        let breakdown = self.explain_city(target, candidate);
        let score = Self::sanitise(breakdown.score());
        trace!(
            "city {} vs {}: {:?} raw {:.4} score {score:.4}",
            target.city.id,
            candidate.city.id,
            breakdown.geography_match,
            breakdown.raw()
        );
        score
    }
}

#[derive(Debug, Clone, Copy)]
struct Geography {
    matched: GeographyMatch,
    weight: f32,
    bonus: f32,
}

impl Geography {
    const NONE: Self = Self {
        matched: GeographyMatch::None,
        weight: 0.0,
        bonus: 0.0,
    };
}

fn continents_match(left: Option<&str>, right: Option<&str>) -> bool {
    matches!((left, right), (Some(a), Some(b)) if !a.is_empty() && a == b)
}
