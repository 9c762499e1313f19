//! Test-only scorers and fixtures used by unit, behaviour and property tests.

use std::collections::HashMap;

use crate::{CityContext, Country, DestinationId, SimilarityScorer};

/// `SimilarityScorer` returning a preset score per candidate identifier.
///
/// Candidates without a preset score receive `default_score`. The target is
/// ignored, which makes ranking order fully controlled by the test.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<DestinationId, f32>,
    default_score: f32,
}

impl FixedScorer {
    /// Create a scorer from `(candidate id, score)` pairs.
    #[must_use]
    pub fn with_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (DestinationId, f32)>,
    {
        Self {
            scores: scores.into_iter().collect(),
            default_score: 0.0,
        }
    }

    /// Score returned for candidates without a preset value.
    #[must_use]
    pub const fn with_default(mut self, score: f32) -> Self {
        self.default_score = score;
        self
    }

    fn lookup(&self, id: DestinationId) -> f32 {
        self.scores.get(&id).copied().unwrap_or(self.default_score)
    }
}

impl SimilarityScorer for FixedScorer {
    fn country_similarity(&self, _target: &Country, candidate: &Country) -> f32 {
        self.lookup(candidate.id)
    }

    fn city_similarity(&self, _target: &CityContext<'_>, candidate: &CityContext<'_>) -> f32 {
        self.lookup(candidate.city.id)
    }
}
