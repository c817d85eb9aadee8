//! Input validation for quadratic fitting.
//!
//! ## Purpose
//!
//! This module provides validation for fitting inputs and sampling
//! parameters. It checks point counts, finite values, and curve-range
//! bounds before any arithmetic runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validated point sets have at least three points, all finite.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not detect *numeric* degeneracy (duplicate x-values,
//!   constant y); those surface as non-finite fit outputs downstream.
//! * This module does not transform or correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::QuadFitError;
use crate::primitives::point::{Point, MIN_POINTS};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fitting inputs and sampling parameters.
///
/// Provides static methods returning `Result<(), QuadFitError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a point slice for fitting.
    pub fn validate_points<T: Float>(points: &[Point<T>]) -> Result<(), QuadFitError> {
        // Check 1: Non-empty input
        if points.is_empty() {
            return Err(QuadFitError::EmptyInput);
        }

        // Check 2: Enough points for a unique quadratic
        if points.len() < MIN_POINTS {
            return Err(QuadFitError::TooFewPoints {
                got: points.len(),
                min: MIN_POINTS,
            });
        }

        // Check 3: All values finite
        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() {
                return Err(QuadFitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    p.x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !p.y.is_finite() {
                return Err(QuadFitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    p.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), QuadFitError> {
        if !val.is_finite() {
            return Err(QuadFitError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the curve sampling range.
    pub fn validate_curve_range<T: Float>(start: T, end: T) -> Result<(), QuadFitError> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(QuadFitError::InvalidCurveRange {
                start: start.to_f64().unwrap_or(f64::NAN),
                end: end.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the curve sampling step.
    pub fn validate_curve_step<T: Float>(step: T) -> Result<(), QuadFitError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(QuadFitError::InvalidCurveStep(
                step.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no builder parameters were set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), QuadFitError> {
        if let Some(parameter) = duplicate_param {
            return Err(QuadFitError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
