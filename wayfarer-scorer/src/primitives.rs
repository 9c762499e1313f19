//! Scoring primitives shared by country and city comparisons.
//!
//! Each helper compares one facet of two destinations and returns a value in
//! `0.0..=1.0`. Helpers that can find nothing comparable return `Option` so
//! callers can tell "no data" apart from "completely different".

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use wayfarer_core::{Attributes, RATING_SCALE_MAX, Ratings, TagSet};

/// Weekly budget difference at which budget similarity reaches zero.
pub const BUDGET_CEILING: f32 = 5_000.0;

/// Set-similarity formula applied to mood and vacation-goal tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SetOverlap {
    /// Shared tags divided by the mean set size. See [`set_overlap_score`].
    #[default]
    AverageSize,
    /// Shared tags divided by the union size. See [`jaccard_score`].
    Jaccard,
}

impl SetOverlap {
    /// Apply the selected formula.
    #[must_use]
    pub fn score(self, left: &TagSet, right: &TagSet) -> f32 {
        match self {
            Self::AverageSize => set_overlap_score(left, right),
            Self::Jaccard => jaccard_score(left, right),
        }
    }
}

/// Shared tags divided by the average of both set sizes.
///
/// Compared with Jaccard this rewards partial overlap more generously: two
/// two-tag sets sharing one tag score `0.5` rather than `0.333`. Returns `0.0`
/// when either set is empty.
///
/// # Examples
/// ```
/// use wayfarer_core::TagSet;
/// use wayfarer_scorer::set_overlap_score;
///
/// let a = TagSet::from_tags(["beach", "affordable"]);
/// let b = TagSet::from_tags(["Beach", "party"]);
/// assert_eq!(set_overlap_score(&a, &b), 0.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "tag counts are small and the ratio needs floating-point division"
)]
pub fn set_overlap_score(left: &TagSet, right: &TagSet) -> f32 {
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let shared = left.intersection_len(right) as f32;
    let average = (left.len() + right.len()) as f32 / 2.0;
    shared / average
}

/// Classic Jaccard index: shared tags divided by distinct tags overall.
///
/// Returns `0.0` when either set is empty, matching [`set_overlap_score`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "tag counts are small and the ratio needs floating-point division"
)]
pub fn jaccard_score(left: &TagSet, right: &TagSet) -> f32 {
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    left.intersection_len(right) as f32 / left.union_len(right) as f32
}

/// One minus the root-mean-square rating difference.
///
/// Each of the five dimensions is differenced after treating a missing rating
/// as `0`, divided by [`RATING_SCALE_MAX`], and squared. Two destinations
/// without any ratings therefore compare as identical. The result is clamped
/// to `0.0..=1.0` and non-finite inputs yield `0.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "root-mean-square needs floating-point arithmetic over five values"
)]
pub fn rating_similarity(left: &Ratings, right: &Ratings) -> f32 {
    let squared: f32 = left
        .as_array()
        .into_iter()
        .zip(right.as_array())
        .map(|(a, b)| {
            let diff = (a.unwrap_or(0.0) - b.unwrap_or(0.0)) / RATING_SCALE_MAX;
            diff * diff
        })
        .sum();
    let rms = (squared / Ratings::DIMENSIONS as f32).sqrt();
    let similarity = 1.0 - rms;
    if similarity.is_finite() {
        similarity.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Budget closeness, `1 - |a - b| / BUDGET_CEILING` floored at zero.
///
/// Returns `None` unless both budgets are present.
///
/// # Examples
/// ```
/// use wayfarer_scorer::budget_similarity;
///
/// let similarity = budget_similarity(Some(800.0), Some(900.0)).unwrap_or_default();
/// assert!((similarity - 0.98).abs() < 1e-6);
/// assert_eq!(budget_similarity(Some(800.0), None), None);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "budget similarity is a normalised absolute difference"
)]
pub fn budget_similarity(left: Option<f32>, right: Option<f32>) -> Option<f32> {
    let (a, b) = (left?, right?);
    // `f32::max` discards NaN, so non-finite budgets fall to zero.
    Some((1.0 - (a - b).abs() / BUDGET_CEILING).max(0.0).min(1.0))
}

/// Fraction of commonly known attributes that agree.
///
/// Only attributes present on both sides are considered. Returns `None` when
/// no attribute is comparable.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "at most fourteen attributes are counted"
)]
pub fn attribute_similarity(left: &Attributes, right: &Attributes) -> Option<f32> {
    let (considered, matching) = left
        .known()
        .filter_map(|(attribute, value)| Some((value, right.get(attribute)?)))
        .fold((0_usize, 0_usize), |(considered, matching), (a, b)| {
            (considered + 1, matching + usize::from(a == b))
        });
    (considered > 0).then(|| matching as f32 / considered as f32)
}

/// Final-stage transform from a raw weighted sum to a `0.0..=1.0` score.
///
/// The square root lifts low and middling sums so the results page shows a
/// meaningful percentage for weak matches. Negative or non-finite sums map
/// to `0.0`; sums above `1.0` saturate.
///
/// # Examples
/// ```
/// use wayfarer_scorer::compress_score;
///
/// assert_eq!(compress_score(0.25), 0.5);
/// assert_eq!(compress_score(1.3), 1.0);
/// assert_eq!(compress_score(f32::NAN), 0.0);
/// ```
#[must_use]
pub fn compress_score(raw: f32) -> f32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    raw.sqrt().min(1.0)
}
