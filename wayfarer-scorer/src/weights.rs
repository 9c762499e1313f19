//! Tunable weights for pairwise similarity.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::SimilarityError;

/// Contribution of each similarity term to the raw weighted sum.
///
/// The weights are additive and need not sum to one: bonuses stack on top of
/// their base terms and the sum is compressed afterwards by
/// [`compress_score`](crate::compress_score).
///
/// # Examples
/// ```
/// use wayfarer_scorer::SimilarityWeights;
///
/// let weights = SimilarityWeights {
///     mood: 0.5,
///     ..SimilarityWeights::default()
/// }
/// .validate()
/// .expect("valid weights");
/// assert_eq!(weights.base_bonus, 0.15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    /// Flat contribution every comparison receives.
    pub base_bonus: f32,
    /// Countries sharing a continent.
    pub continent: f32,
    /// Extra bonus for countries sharing a continent.
    pub continent_bonus: f32,
    /// Cities in the same country.
    pub same_country: f32,
    /// Extra bonus for cities in the same country.
    pub same_country_bonus: f32,
    /// Cities in different countries on the same continent.
    pub shared_continent: f32,
    /// Extra bonus for cities sharing only a continent.
    pub shared_continent_bonus: f32,
    /// Mood tag overlap.
    pub mood: f32,
    /// Extra bonus once mood overlap exceeds
    /// [`mood_bonus_threshold`](Self::mood_bonus_threshold).
    pub mood_bonus: f32,
    /// Mood overlap above which [`mood_bonus`](Self::mood_bonus) applies.
    pub mood_bonus_threshold: f32,
    /// Vacation-goal tag overlap.
    pub vacation_goal: f32,
    /// Rating closeness.
    pub ratings: f32,
    /// Weekly budget closeness.
    pub budget: f32,
    /// Boolean attribute agreement.
    pub attributes: f32,
}

impl SimilarityWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`SimilarityError::InvalidWeight`] for negative or non-finite
    /// weights and [`SimilarityError::InvalidMoodThreshold`] when the mood
    /// threshold falls outside `0.0..=1.0`.
    pub fn validate(self) -> Result<Self, SimilarityError> {
        if let Some((field, value)) = self
            .named()
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(SimilarityError::InvalidWeight { field, value });
        }
        if !(0.0..=1.0).contains(&self.mood_bonus_threshold) {
            return Err(SimilarityError::InvalidMoodThreshold {
                value: self.mood_bonus_threshold,
            });
        }
        Ok(self)
    }

    const fn named(&self) -> [(&'static str, f32); 13] {
        [
            ("base_bonus", self.base_bonus),
            ("continent", self.continent),
            ("continent_bonus", self.continent_bonus),
            ("same_country", self.same_country),
            ("same_country_bonus", self.same_country_bonus),
            ("shared_continent", self.shared_continent),
            ("shared_continent_bonus", self.shared_continent_bonus),
            ("mood", self.mood),
            ("mood_bonus", self.mood_bonus),
            ("vacation_goal", self.vacation_goal),
            ("ratings", self.ratings),
            ("budget", self.budget),
            ("attributes", self.attributes),
        ]
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            base_bonus: 0.15,
            continent: 0.30,
            continent_bonus: 0.10,
            same_country: 0.15,
            same_country_bonus: 0.15,
            shared_continent: 0.075,
            shared_continent_bonus: 0.08,
            mood: 0.35,
            mood_bonus: 0.05,
            mood_bonus_threshold: 0.3,
            vacation_goal: 0.15,
            ratings: 0.10,
            budget: 0.05,
            attributes: 0.05,
        }
    }
}
