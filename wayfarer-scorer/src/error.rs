//! Error types raised while configuring the similarity scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when building a scorer or ranker from custom settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimilarityError {
    /// A weight was negative or not finite.
    #[error("similarity weight `{field}` must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the offending weight.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The mood bonus threshold fell outside `0.0..=1.0`.
    #[error("mood bonus threshold must lie within 0.0..=1.0, got {value}")]
    InvalidMoodThreshold {
        /// The rejected value.
        value: f32,
    },
    /// The ranking threshold fell outside `0.0..=1.0`.
    #[error("minimum similarity must lie within 0.0..=1.0, got {value}")]
    InvalidMinSimilarity {
        /// The rejected value.
        value: f32,
    },
}
