//! Error taxonomy for the sorting core.
//!
//! The engines themselves never fail once their bounds are validated; these
//! errors surface only at the checked entry points.

use thiserror::Error;

/// Errors reported by [`NumericVector`](crate::core::NumericVector) and the
/// range-based engine entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    /// An index fell outside `[0, len)`.
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A partition was requested over a range with no room for a pivot.
    #[error("degenerate range [{lo}, {hi}]: partitioning needs hi > lo")]
    DegenerateRange { lo: usize, hi: usize },

    /// Random-fill bounds were non-finite or inverted.
    #[error("invalid value range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}

pub type Result<T, E = SortError> = std::result::Result<T, E>;
