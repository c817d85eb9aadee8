//! Least-squares quadratic regression.
//!
//! ## Purpose
//!
//! This module provides the core fitting algorithm: building the 3×3
//! normal-equations system from a point set and solving it for the
//! coefficients of `y = ax² + bx + c`, plus polynomial evaluation.
//!
//! ## Design notes
//!
//! * **Algorithm**: Ordinary least squares via the normal equations,
//!   solved by Gaussian elimination with partial pivoting.
//! * **Pure**: Fitting is a pure function of the input points; calling it
//!   twice on the same set returns identical coefficients.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The fit is invariant under permutation of the input points (the
//!   normal equations only see sums).
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by the engine).
//! * This module does not compute diagnostics (see `evaluation`).
//! * Degenerate inputs (duplicate x-values collapsing the system) are not
//!   detected; non-finite coefficients propagate to the caller.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::solve_3x3;
use crate::math::moments::PowerSums;
use crate::primitives::point::Point;

// ============================================================================
// Coefficients
// ============================================================================

/// Coefficients of a fitted quadratic `y = ax² + bx + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<T> {
    /// Quadratic coefficient.
    pub a: T,
    /// Linear coefficient.
    pub b: T,
    /// Constant term.
    pub c: T,
}

impl<T: Float> Coefficients<T> {
    /// Evaluate the quadratic at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.a * x * x + self.b * x + self.c
    }

    /// Whether all three coefficients are finite.
    ///
    /// A non-finite coefficient indicates a singular or near-singular
    /// normal-equations system (e.g. fewer than three distinct x-values).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit a quadratic to `points` by least squares.
///
/// Assumes at least three points; the engine validates this before
/// calling. With exactly three points the result interpolates the input
/// exactly.
pub fn fit<T: Float>(points: &[Point<T>]) -> Coefficients<T> {
    let (matrix, rhs) = PowerSums::accumulate(points).normal_equations();
    let [a, b, c] = solve_3x3(matrix, rhs);
    Coefficients { a, b, c }
}

/// Evaluate a fitted quadratic at `x`.
///
/// Free-function form of [`Coefficients::evaluate`].
#[inline]
pub fn predict<T: Float>(coefficients: &Coefficients<T>, x: T) -> T {
    coefficients.evaluate(x)
}
