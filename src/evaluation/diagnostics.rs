//! Goodness-of-fit diagnostics for a fitted quadratic.
//!
//! ## Purpose
//!
//! This module measures how well fitted coefficients describe the observed
//! points: the coefficient of determination (R²), per-point residuals, and
//! per-point verification records (actual vs. predicted with absolute
//! error).
//!
//! ## Design notes
//!
//! * **Formulas**: `R² = 1 − SS_res / SS_tot` with
//!   `SS_res = Σ(yᵢ − ŷᵢ)²` and `SS_tot = Σ(yᵢ − ȳ)²`.
//! * **Degenerate inputs**: A constant-y point set has `SS_tot = 0`; the
//!   division is performed anyway and yields a non-finite R². Consumers
//!   are expected to detect non-finite scores and render them defensively.
//!
//! ## Invariants
//!
//! * For a non-degenerate point set, R² ≤ 1, with equality exactly when
//!   every residual is zero (e.g. a three-point exact interpolation).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::Coefficients;
use crate::primitives::point::Point;

// ============================================================================
// R²
// ============================================================================

/// Compute the coefficient of determination (R²) of `coefficients` over
/// `points`.
///
/// Returns a non-finite value when all y-values are equal (`SS_tot = 0`).
pub fn r_squared<T: Float>(coefficients: &Coefficients<T>, points: &[Point<T>]) -> T {
    let n = T::from(points.len()).unwrap();
    let y_mean = points.iter().fold(T::zero(), |acc, p| acc + p.y) / n;

    let mut ss_res = T::zero();
    let mut ss_tot = T::zero();
    for p in points {
        let predicted = coefficients.evaluate(p.x);
        let res = p.y - predicted;
        let dev = p.y - y_mean;
        ss_res = ss_res + res * res;
        ss_tot = ss_tot + dev * dev;
    }

    T::one() - ss_res / ss_tot
}

// ============================================================================
// Residuals & Verification
// ============================================================================

/// Residuals `yᵢ − ŷᵢ` in input order.
pub fn residuals<T: Float>(coefficients: &Coefficients<T>, points: &[Point<T>]) -> Vec<T> {
    points
        .iter()
        .map(|p| p.y - coefficients.evaluate(p.x))
        .collect()
}

/// One row of the per-point verification table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointFitRecord<T> {
    /// Predictor value of the original point.
    pub x: T,
    /// Observed response.
    pub actual: T,
    /// Response predicted by the fit.
    pub predicted: T,
    /// Absolute error `|actual − predicted|`.
    pub abs_error: T,
}

/// Build the per-point verification table: each input point alongside its
/// predicted value and absolute error.
pub fn verify<T: Float>(
    coefficients: &Coefficients<T>,
    points: &[Point<T>],
) -> Vec<PointFitRecord<T>> {
    points
        .iter()
        .map(|p| {
            let predicted = coefficients.evaluate(p.x);
            PointFitRecord {
                x: p.x,
                actual: p.y,
                predicted,
                abs_error: (p.y - predicted).abs(),
            }
        })
        .collect()
}
