//! High-level API for quadratic curve fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the fitting pipeline and an immutable model
//! that runs it.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters (curve range 70..160, step 5, curve sampling on).
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   setting the same parameter twice is an error.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Configuration Flow
//!
//! 1. Create a [`QuadFitBuilder`] via `QuadFit::new()`.
//! 2. Chain configuration methods (`.curve_range()`, `.curve_step()`, ...).
//! 3. Call `.build()` to obtain a validated [`QuadFitModel`].
//! 4. Call `.fit(&points)` as often as the point set changes.

use core::fmt::Debug;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{self, FitConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::regression::Coefficients;
pub use crate::engine::executor::{FitReport, DEFAULT_CURVE_END, DEFAULT_CURVE_START, DEFAULT_CURVE_STEP};
pub use crate::evaluation::diagnostics::PointFitRecord;
pub use crate::primitives::errors::QuadFitError;
pub use crate::primitives::point::{Point, PointSet, MIN_POINTS};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring quadratic fitting.
///
/// Aliased as `QuadFit` in the prelude:
///
/// ```rust
/// use quadfit_rs::prelude::*;
///
/// let model = QuadFit::new()
///     .curve_range(70.0, 160.0)
///     .curve_step(5.0)
///     .return_residuals()
///     .build()?;
/// let report = model.fit(&PointSet::seed())?;
/// # Result::<(), QuadFitError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct QuadFitBuilder<T: Float + Debug> {
    /// Sampled curve range `(start, end)`.
    pub curve_range: Option<(T, T)>,

    /// Stride between curve samples.
    pub curve_step: Option<T>,

    /// Skip curve sampling in the report.
    pub skip_curve: Option<bool>,

    /// Include residuals in the report.
    pub return_residuals: Option<bool>,

    /// Include the per-point verification table in the report.
    pub return_verification: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for QuadFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> QuadFitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            curve_range: None,
            curve_step: None,
            skip_curve: None,
            return_residuals: None,
            return_verification: None,
            duplicate_param: None,
        }
    }

    /// Set the x-range over which the fitted curve is sampled.
    pub fn curve_range(mut self, start: T, end: T) -> Self {
        if self.curve_range.is_some() {
            self.duplicate_param = Some("curve_range");
        }
        self.curve_range = Some((start, end));
        self
    }

    /// Set the stride between curve samples.
    pub fn curve_step(mut self, step: T) -> Self {
        if self.curve_step.is_some() {
            self.duplicate_param = Some("curve_step");
        }
        self.curve_step = Some(step);
        self
    }

    /// Omit the sampled curve from the report.
    pub fn skip_curve(mut self) -> Self {
        self.skip_curve = Some(true);
        self
    }

    /// Include residuals in the report.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Include the per-point verification table in the report.
    pub fn return_verification(mut self) -> Self {
        self.return_verification = Some(true);
        self
    }

    /// Validate the configuration and produce an immutable model.
    pub fn build(self) -> Result<QuadFitModel<T>, QuadFitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = FitConfig::default();
        if let Some((start, end)) = self.curve_range {
            Validator::validate_curve_range(start, end)?;
            config.curve_start = start;
            config.curve_end = end;
        }
        if let Some(step) = self.curve_step {
            Validator::validate_curve_step(step)?;
            config.curve_step = step;
        }
        if let Some(skip) = self.skip_curve {
            config.return_curve = !skip;
        }
        if let Some(res) = self.return_residuals {
            config.return_residuals = res;
        }
        if let Some(ver) = self.return_verification {
            config.return_verification = ver;
        }

        Ok(QuadFitModel { config })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated, immutable fitting model.
///
/// Stateless apart from its configuration; `fit` may be called repeatedly
/// and concurrently.
#[derive(Debug, Clone)]
pub struct QuadFitModel<T: Float + Debug> {
    config: FitConfig<T>,
}

impl<T: Float + Debug> QuadFitModel<T> {
    /// Fit a quadratic to `points` and assemble the full report.
    pub fn fit(&self, points: &PointSet<T>) -> Result<FitReport<T>, QuadFitError> {
        executor::execute(points, &self.config)
    }

    /// The validated configuration this model runs with.
    pub fn config(&self) -> &FitConfig<T> {
        &self.config
    }
}
