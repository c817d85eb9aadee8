//! Error types for quadratic fitting.
//!
//! ## Purpose
//!
//! This module defines the error taxonomy for the crate. Errors are
//! reported for defects in input *shape* (too few points, non-finite
//! values, bad sampling parameters) and for API misuse (duplicate builder
//! parameters, out-of-range indices).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Errors surface before any arithmetic is performed.
//! * **No panics**: All fallible operations return `Result<_, QuadFitError>`.
//! * **no_std**: `Display` is implemented by hand against `core::fmt`.
//!
//! ## Non-goals
//!
//! * Numeric degeneracy (singular normal matrix, zero y-variance) is not an
//!   error; it propagates as non-finite output values by design.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// QuadFitError
// ============================================================================

/// Errors returned by validation and the fitting pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadFitError {
    /// The point set is empty.
    EmptyInput,

    /// The point set has fewer points than a quadratic fit requires.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// A non-finite (NaN or infinite) value reached the engine.
    InvalidNumericValue(String),

    /// A point index was outside the bounds of the point set.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the point set.
        len: usize,
    },

    /// Removing a point would shrink the set below the minimum size.
    MinimumPointsReached {
        /// Current length of the point set.
        len: usize,
    },

    /// The curve sampling range is inverted or non-finite.
    InvalidCurveRange {
        /// Start of the range.
        start: f64,
        /// End of the range.
        end: f64,
    },

    /// The curve sampling step is non-positive or non-finite.
    InvalidCurveStep(f64),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for QuadFitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadFitError::EmptyInput => write!(f, "Input point set is empty"),
            QuadFitError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            QuadFitError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            QuadFitError::IndexOutOfBounds { index, len } => {
                write!(f, "Point index {} out of bounds (len {})", index, len)
            }
            QuadFitError::MinimumPointsReached { len } => {
                write!(
                    f,
                    "Cannot remove point: {} points is the minimum for a quadratic fit",
                    len
                )
            }
            QuadFitError::InvalidCurveRange { start, end } => {
                write!(
                    f,
                    "Invalid curve range: [{}, {}] (must be finite with start <= end)",
                    start, end
                )
            }
            QuadFitError::InvalidCurveStep(step) => {
                write!(f, "Invalid curve step: {} (must be > 0 and finite)", step)
            }
            QuadFitError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuadFitError {}
