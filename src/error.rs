//! Errors for integration methods

use crate::Float;

/// Validation and propagation errors returned by the integrator entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Step size must be strictly positive.
    #[error("step size must be positive (got {0})")]
    InvalidStepSize(Float),

    /// The initial state has zero length.
    #[error("initial state must be non-empty")]
    EmptyState,

    /// Both interval endpoints coincide, so there is nothing to integrate.
    #[error("integration interval is empty (both endpoints equal {0})")]
    EmptyInterval(Float),

    /// The absolute tolerance enters the error scale denominator and must be
    /// strictly positive.
    #[error("absolute tolerance must be positive (got {0})")]
    NonPositiveAbsTol(Float),

    /// Step bounds must satisfy `0 < h_min <= h_max`.
    #[error("step bounds must satisfy 0 < h_min <= h_max (got h_min = {h_min}, h_max = {h_max})")]
    InvalidStepBounds { h_min: Float, h_max: Float },

    /// The step cap must be positive.
    #[error("nmax must be positive (got {0})")]
    NMaxMustBePositive(usize),

    /// The user right-hand side failed; the original failure is preserved
    /// unmodified as the source.
    #[error("derivative evaluation failed at t = {t}")]
    Evaluation {
        t: Float,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn evaluation(t: Float, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Evaluation { t, source }
    }
}
