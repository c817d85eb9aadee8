//! Fitting pipeline execution and report assembly.
//!
//! ## Purpose
//!
//! This module orchestrates a complete fit: validate the input, solve for
//! coefficients, score the fit, and assemble the optional outputs
//! (residuals, verification table, sampled curve) into a [`FitReport`].
//!
//! ## Design notes
//!
//! * **Configuration**: `FitConfig` carries the sampling range and output
//!   toggles; the executor itself is stateless.
//! * **Curve sampling**: x-values are generated by index
//!   (`start + i · step`) rather than repeated accumulation, so the end of
//!   the range is hit exactly when `(end − start)` is a multiple of `step`.
//!
//! ## Invariants
//!
//! * The report's coefficients and R² are pure functions of the input
//!   point set; re-running a fit on unchanged points yields an identical
//!   report.
//!
//! ## Non-goals
//!
//! * No caching or debouncing: every call recomputes from scratch.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{self, Coefficients};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::{self, PointFitRecord};
use crate::primitives::errors::QuadFitError;
use crate::primitives::point::{Point, PointSet};

/// Default start of the sampled curve range.
pub const DEFAULT_CURVE_START: f64 = 70.0;

/// Default end of the sampled curve range.
pub const DEFAULT_CURVE_END: f64 = 160.0;

/// Default stride between curve samples.
pub const DEFAULT_CURVE_STEP: f64 = 5.0;

// ============================================================================
// FitConfig
// ============================================================================

/// Validated configuration for the fitting pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig<T> {
    /// Start of the sampled curve range.
    pub curve_start: T,
    /// End of the sampled curve range (inclusive when reachable).
    pub curve_end: T,
    /// Stride between curve samples.
    pub curve_step: T,
    /// Include the sampled curve in the report.
    pub return_curve: bool,
    /// Include residuals in the report.
    pub return_residuals: bool,
    /// Include the per-point verification table in the report.
    pub return_verification: bool,
}

impl<T: Float> Default for FitConfig<T> {
    fn default() -> Self {
        Self {
            curve_start: T::from(DEFAULT_CURVE_START).unwrap(),
            curve_end: T::from(DEFAULT_CURVE_END).unwrap(),
            curve_step: T::from(DEFAULT_CURVE_STEP).unwrap(),
            return_curve: true,
            return_residuals: false,
            return_verification: false,
        }
    }
}

// ============================================================================
// FitReport
// ============================================================================

/// The complete output of one fitting pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport<T> {
    /// Fitted quadratic coefficients.
    pub coefficients: Coefficients<T>,

    /// Coefficient of determination. Non-finite when all y-values are
    /// equal (`SS_tot = 0`).
    pub r_squared: T,

    /// Sampled curve for plotting, when requested.
    pub curve: Option<Vec<Point<T>>>,

    /// Residuals `yᵢ − ŷᵢ` in input order, when requested.
    pub residuals: Option<Vec<T>>,

    /// Per-point verification table, when requested.
    pub verification: Option<Vec<PointFitRecord<T>>>,
}

impl<T: Float> FitReport<T> {
    /// Predict y for an arbitrary x using the fitted coefficients.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.coefficients.evaluate(x)
    }
}

impl<T: Float + fmt::Display> fmt::Display for FitReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "y = {:.4}x\u{b2} + {:.4}x + {:.2}",
            self.coefficients.a, self.coefficients.b, self.coefficients.c
        )?;
        write!(f, "R\u{b2} = {:.4}", self.r_squared)
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Run the full fitting pipeline over `points` with `config`.
///
/// Validates the input, fits the quadratic, computes R², and assembles the
/// optional outputs. Numeric degeneracy (singular normal matrix, constant
/// y) is not an error; it appears as non-finite values in the report.
pub fn execute<T: Float>(
    points: &PointSet<T>,
    config: &FitConfig<T>,
) -> Result<FitReport<T>, QuadFitError> {
    Validator::validate_points(points.points())?;

    let coefficients = regression::fit(points.points());
    let r_squared = diagnostics::r_squared(&coefficients, points.points());

    let curve = config
        .return_curve
        .then(|| sample_curve(&coefficients, config.curve_start, config.curve_end, config.curve_step));
    let residuals = config
        .return_residuals
        .then(|| diagnostics::residuals(&coefficients, points.points()));
    let verification = config
        .return_verification
        .then(|| diagnostics::verify(&coefficients, points.points()));

    Ok(FitReport {
        coefficients,
        r_squared,
        curve,
        residuals,
        verification,
    })
}

/// Sample the fitted curve at evenly spaced x-values.
///
/// Produces points at `start, start + step, ...` up to and including `end`
/// when the range is an exact multiple of `step`.
pub fn sample_curve<T: Float>(
    coefficients: &Coefficients<T>,
    start: T,
    end: T,
    step: T,
) -> Vec<Point<T>> {
    let mut curve = Vec::new();
    let mut i = 0usize;
    loop {
        let x = start + step * T::from(i).unwrap();
        if x > end {
            break;
        }
        curve.push(Point::new(x, coefficients.evaluate(x)));
        i += 1;
    }
    curve
}
