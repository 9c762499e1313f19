//! Score pairs of destinations for similarity.
//!
//! The `SimilarityScorer` trait assigns a similarity to a candidate
//! destination given a ranking target of the same kind.

use crate::{City, Country};

/// A city paired with its resolved parent country.
///
/// `country` is `None` when the city's foreign key matched no known country;
/// continent-level comparisons are skipped in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityContext<'a> {
    /// The city being compared.
    pub city: &'a City,
    /// The city's parent country, when resolvable.
    pub country: Option<&'a Country>,
}

impl<'a> CityContext<'a> {
    /// Pair a city with its parent country.
    #[must_use]
    pub const fn new(city: &'a City, country: Option<&'a Country>) -> Self {
        Self { city, country }
    }

    /// Continent of the parent country, if both are known.
    #[must_use]
    pub fn continent(&self) -> Option<&'a str> {
        self.country.and_then(|country| country.continent.as_deref())
    }
}

/// Calculate the similarity between two destinations of the same kind.
///
/// Higher scores indicate more alike destinations. Implementations must be
/// thread-safe (`Send` + `Sync`) so ranking can run concurrently across
/// requests. The methods are infallible; missing data lowers the score
/// instead of failing.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return values in the range `0.0..=1.0`.
///
/// Use [`SimilarityScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{CityContext, Country, SimilarityScorer};
///
/// struct SameContinent;
///
/// impl SimilarityScorer for SameContinent {
///     fn country_similarity(&self, target: &Country, candidate: &Country) -> f32 {
///         if target.continent == candidate.continent { 1.0 } else { 0.0 }
///     }
///
///     fn city_similarity(&self, _target: &CityContext<'_>, _candidate: &CityContext<'_>) -> f32 {
///         0.0
///     }
/// }
///
/// let a = Country::new(1, "Chile").with_continent("South America");
/// let b = Country::new(2, "Peru").with_continent("South America");
/// assert_eq!(SameContinent.country_similarity(&a, &b), 1.0);
/// ```
pub trait SimilarityScorer: Send + Sync {
    /// Similarity of `candidate` to `target`, both countries.
    fn country_similarity(&self, target: &Country, candidate: &Country) -> f32;

    /// Similarity of `candidate` to `target`, both cities with their parent
    /// countries.
    fn city_similarity(&self, target: &CityContext<'_>, candidate: &CityContext<'_>) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

impl<S: SimilarityScorer + ?Sized> SimilarityScorer for &S {
    fn country_similarity(&self, target: &Country, candidate: &Country) -> f32 {
        (**self).country_similarity(target, candidate)
    }

    fn city_similarity(&self, target: &CityContext<'_>, candidate: &CityContext<'_>) -> f32 {
        (**self).city_similarity(target, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Constant(f32);

    impl SimilarityScorer for Constant {
        fn country_similarity(&self, _target: &Country, _candidate: &Country) -> f32 {
            Self::sanitise(self.0)
        }

        fn city_similarity(&self, _target: &CityContext<'_>, _candidate: &CityContext<'_>) -> f32 {
            Self::sanitise(self.0)
        }
    }

    #[rstest]
    #[case(f32::NAN, 0.0)]
    #[case(f32::INFINITY, 0.0)]
    #[case(-0.4, 0.0)]
    #[case(1.3, 1.0)]
    #[case(0.6, 0.6)]
    fn sanitise_clamps_and_filters(#[case] raw: f32, #[case] expected: f32) {
        let country = Country::new(1, "Chad");
        let score = Constant(raw).country_similarity(&country, &country);
        assert!((score - expected).abs() <= 1e-6);
    }

    #[rstest]
    fn references_delegate() {
        let scorer = Constant(0.25);
        let by_ref: &dyn SimilarityScorer = &scorer;
        let city = City::new(1, "Nice", 9);
        let context = CityContext::new(&city, None);
        assert!((by_ref.city_similarity(&context, &context) - 0.25).abs() <= 1e-6);
    }

    #[rstest]
    fn continent_requires_country() {
        let country = Country::new(9, "France").with_continent("Europe");
        let city = City::new(1, "Nice", 9);
        assert_eq!(CityContext::new(&city, Some(&country)).continent(), Some("Europe"));
        assert_eq!(CityContext::new(&city, None).continent(), None);
    }
}
