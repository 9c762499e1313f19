//! Numeric destination ratings and the scale they are stored on.

/// Upper bound of the canonical rating scale.
///
/// Every rating handled by the engine is expected on `0.0..=5.0`. Sources that
/// store ratings as percentages convert them with [`Ratings::rescaled`].
pub const RATING_SCALE_MAX: f32 = 5.0;

/// Scale a set of raw ratings was recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RatingScale {
    /// Ratings between `0` and `5`, the canonical scale.
    #[default]
    Five,
    /// Ratings between `0` and `100`.
    Percent,
}

impl RatingScale {
    /// Upper bound of the scale.
    #[must_use]
    pub const fn max(self) -> f32 {
        match self {
            Self::Five => RATING_SCALE_MAX,
            Self::Percent => 100.0,
        }
    }

    /// Return the scale name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Five => "five",
            Self::Percent => "percent",
        }
    }
}

impl std::fmt::Display for RatingScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RatingScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "five" | "5" => Ok(Self::Five),
            "percent" | "100" => Ok(Self::Percent),
            _ => Err(format!("unknown rating scale '{s}'")),
        }
    }
}

/// The five rating dimensions compared by the scorer.
///
/// Each rating is optional. Absent values are kept as `None` here; the scorer
/// decides how to treat them.
///
/// # Examples
/// ```
/// use wayfarer_core::{RatingScale, Ratings};
///
/// let raw = Ratings {
///     overall: Some(80.0),
///     ..Ratings::default()
/// };
/// let canonical = raw.rescaled(RatingScale::Percent);
/// assert_eq!(canonical.overall, Some(4.0));
/// assert_eq!(canonical.cost, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ratings {
    /// Overall impression.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "overallRating", skip_serializing_if = "Option::is_none")
    )]
    pub overall: Option<f32>,
    /// Affordability.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "costRating", skip_serializing_if = "Option::is_none")
    )]
    pub cost: Option<f32>,
    /// Perceived safety.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "safetyRating", skip_serializing_if = "Option::is_none")
    )]
    pub safety: Option<f32>,
    /// Entertainment value.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "funRating", skip_serializing_if = "Option::is_none")
    )]
    pub fun: Option<f32>,
    /// Food quality.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "foodRating", skip_serializing_if = "Option::is_none")
    )]
    pub food: Option<f32>,
}

impl Ratings {
    /// Number of rating dimensions.
    pub const DIMENSIONS: usize = 5;

    /// Construct ratings with every dimension present.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self {
            overall: Some(value),
            cost: Some(value),
            safety: Some(value),
            fun: Some(value),
            food: Some(value),
        }
    }

    /// Return the dimensions in a fixed order: overall, cost, safety, fun,
    /// food.
    #[must_use]
    pub const fn as_array(&self) -> [Option<f32>; Self::DIMENSIONS] {
        [self.overall, self.cost, self.safety, self.fun, self.food]
    }

    /// Named view over the dimensions, useful for validation messages.
    #[must_use]
    pub const fn named(&self) -> [(&'static str, Option<f32>); Self::DIMENSIONS] {
        [
            ("overallRating", self.overall),
            ("costRating", self.cost),
            ("safetyRating", self.safety),
            ("funRating", self.fun),
            ("foodRating", self.food),
        ]
    }

    /// Report whether no dimension is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_array().iter().all(Option::is_none)
    }

    /// Convert ratings recorded on `scale` to the canonical `0..=5` scale.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "scale conversion multiplies by a constant ratio"
    )]
    pub fn rescaled(self, scale: RatingScale) -> Self {
        let ratio = RATING_SCALE_MAX / scale.max();
        let convert = |value: Option<f32>| value.map(|rating| rating * ratio);
        Self {
            overall: convert(self.overall),
            cost: convert(self.cost),
            safety: convert(self.safety),
            fun: convert(self.fun),
            food: convert(self.food),
        }
    }
}
