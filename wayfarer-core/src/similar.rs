//! Ranked similarity results.

/// A destination paired with its similarity to a ranking target.
///
/// `T` is usually a reference into the caller's candidate pool, so ranking
/// never clones destination records.
///
/// # Examples
/// ```
/// use wayfarer_core::{Country, Similar};
///
/// let country = Country::new(2, "Vietnam");
/// let similar = Similar::new(&country, 0.734);
/// assert_eq!(similar.match_percent(), 73);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Similar<T> {
    /// The ranked destination.
    pub entity: T,
    /// Similarity to the target in `0.0..=1.0`.
    pub similarity: f32,
}

impl<T> Similar<T> {
    /// Pair `entity` with `similarity`.
    #[must_use]
    pub const fn new(entity: T, similarity: f32) -> Self {
        Self { entity, similarity }
    }

    /// Similarity expressed as a whole percentage, as shown on "% match"
    /// badges.
    ///
    /// Non-finite similarities report `0`; values are clamped to `0..=100`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the clamped percentage always fits in a u8"
    )]
    pub fn match_percent(&self) -> u8 {
        if !self.similarity.is_finite() {
            return 0;
        }
        (self.similarity * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
