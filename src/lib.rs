//! # quadfit-rs — Least-squares quadratic curve fitting
//!
//! A small, pure regression engine that fits `y = ax² + bx + c` to a set
//! of `(x, y)` points, predicts y for arbitrary x, scores the fit with R²,
//! and samples the fitted curve for plotting.
//!
//! ## How it works
//!
//! 1. Accumulate the power sums Σx..Σx⁴, Σy, Σxy, Σx²y over the points.
//! 2. Assemble the 3×3 normal-equations system.
//! 3. Solve it by Gaussian elimination with partial pivoting.
//! 4. Score the result with `R² = 1 − SS_res / SS_tot`.
//!
//! Three points are the minimum for a unique quadratic; with exactly three
//! points the fit interpolates the input exactly (R² = 1).
//!
//! ## Quick Start
//!
//! ```rust
//! use quadfit_rs::prelude::*;
//!
//! let mut points = PointSet::from_points(vec![
//!     Point::new(75.0, 1080.0),
//!     Point::new(100.0, 1240.0),
//!     Point::new(125.0, 1340.0),
//!     Point::new(150.0, 1420.0),
//! ])?;
//!
//! // Build the model
//! let model = QuadFit::new()
//!     .curve_range(70.0, 160.0)   // Sample the curve over [70, 160]
//!     .curve_step(5.0)            // ...every 5 units
//!     .build()?;
//!
//! // Fit the model to the data
//! let report = model.fit(&points)?;
//!
//! println!("{}", report);
//! println!("y(90) = {:.2}", report.predict(90.0));
//!
//! // Edit the points and refit; the model is stateless and reusable.
//! points.add_point();
//! points.set_x(4, 160.0)?;
//! points.set_y(4, 1450.0)?;
//! let report = model.fit(&points)?;
//! # let _ = report;
//! # Result::<(), QuadFitError>::Ok(())
//! ```
//!
//! ```text
//! y = -0.0320x² + 11.6800x + 386.00
//! R² = 0.9988
//! ```
//!
//! ## Degenerate inputs
//!
//! Input-shape defects (fewer than three points, NaN/infinite values, a
//! bad sampling range) fail fast with [`QuadFitError`]. Numeric
//! degeneracy is deliberately *not* an error:
//!
//! * Fewer than three **distinct** x-values make the normal matrix
//!   singular; the solver divides through and the coefficients come back
//!   non-finite ([`Coefficients::is_finite`] detects this).
//! * A constant-y point set has zero variance; R² comes back non-finite.
//!
//! Consumers rendering these values are expected to detect non-finite
//! outputs and display them defensively (e.g. "N/A").
//!
//! ## Feature flags
//!
//! * `std` (default) — standard library support. Disable for `no_std`
//!   targets (an allocator is still required).
//! * `dev` — expose internal modules for testing; not covered by semver.
//!
//! [`QuadFitError`]: crate::prelude::QuadFitError
//! [`Coefficients::is_finite`]: crate::prelude::Coefficients::is_finite

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the point data model (`Point`, `PointSet`) and the error
// taxonomy (`QuadFitError`).
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains power-sum accumulation for the normal equations and the
// fixed-size Gaussian-elimination solver with partial pivoting.
mod math;

// Layer 3: Algorithms - the regression core.
//
// Contains least-squares quadratic fitting (`fit`) and polynomial
// evaluation (`predict`).
mod algorithms;

// Layer 4: Evaluation - post-fit diagnostics.
//
// Contains the R² score, residuals, and per-point verification records.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains fail-fast validation and the executor that assembles the
// complete fit report.
mod engine;

// High-level fluent API for quadratic fitting.
//
// Provides the `QuadFit` builder for configuring and running fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use quadfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Coefficients, FitReport, Point, PointFitRecord, PointSet, QuadFitBuilder as QuadFit,
        QuadFitError, QuadFitModel, MIN_POINTS,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
