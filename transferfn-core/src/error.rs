//! Curve error types.

use thiserror::Error;

/// Ways a raw point list can fail curve validation.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("A curve needs at least 2 points, got {found}")]
    TooFewPoints { found: usize },

    #[error("Curve points are not sorted by position")]
    OutOfOrder,

    #[error("A curve must span 0 to 1, got {first} to {last}")]
    IncompleteSpan { first: f32, last: f32 },
}
