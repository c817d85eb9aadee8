//! Integration tests for the public fitting API.
//!
//! Exercises the builder → model → report flow end to end, including the
//! reference fit from the launcher-speed calculator data set, curve
//! sampling, and builder validation.

use approx::assert_relative_eq;
use quadfit_rs::prelude::*;

fn seed_points() -> PointSet<f64> {
    PointSet::from_points(vec![
        Point::new(75.0, 1080.0),
        Point::new(100.0, 1240.0),
        Point::new(125.0, 1340.0),
        Point::new(150.0, 1420.0),
    ])
    .unwrap()
}

// ============================================================================
// Reference Fit
// ============================================================================

#[test]
fn test_reference_fit_coefficients() {
    // Exact least-squares solution (verified with rational arithmetic):
    // a = -4/125, b = 292/25, c = 386.
    let report = QuadFit::new().build().unwrap().fit(&seed_points()).unwrap();

    assert_relative_eq!(report.coefficients.a, -0.032, max_relative = 1e-9);
    assert_relative_eq!(report.coefficients.b, 11.68, max_relative = 1e-9);
    assert_relative_eq!(report.coefficients.c, 386.0, max_relative = 1e-9);
    assert!(report.coefficients.is_finite());
}

#[test]
fn test_reference_fit_r_squared() {
    // SS_res = 80 exactly for the seed set.
    let report = QuadFit::new().build().unwrap().fit(&seed_points()).unwrap();
    assert_relative_eq!(report.r_squared, 0.9987577639751553, max_relative = 1e-12);
}

#[test]
fn test_predict_interpolates_and_extrapolates() {
    let report = QuadFit::new().build().unwrap().fit(&seed_points()).unwrap();

    // Values from the exact coefficients.
    assert_relative_eq!(report.predict(70.0), 1046.8, max_relative = 1e-9);
    assert_relative_eq!(report.predict(90.0), 1178.0, max_relative = 1e-9);
    assert_relative_eq!(report.predict(160.0), 1435.6, max_relative = 1e-9);
}

#[test]
fn test_fit_is_deterministic() {
    let model = QuadFit::new().build().unwrap();
    let points = seed_points();

    let first = model.fit(&points).unwrap();
    let second = model.fit(&points).unwrap();
    assert_eq!(
        first.coefficients, second.coefficients,
        "refitting unchanged points must be bit-identical"
    );
    assert_eq!(first.r_squared, second.r_squared);
}

#[test]
fn test_fit_display_format() {
    let report = QuadFit::new().build().unwrap().fit(&seed_points()).unwrap();
    let text = format!("{}", report);
    assert!(text.contains("y = -0.0320x\u{b2} + 11.6800x + 386.00"), "{}", text);
    assert!(text.contains("R\u{b2} = 0.9988"), "{}", text);
}

// ============================================================================
// Curve Sampling
// ============================================================================

#[test]
fn test_default_curve_sampling() {
    // Default range is 70..160 step 5: 19 samples, endpoints included.
    let report = QuadFit::new().build().unwrap().fit(&seed_points()).unwrap();

    let curve = report.curve.as_ref().expect("curve is on by default");
    assert_eq!(curve.len(), 19);
    assert_relative_eq!(curve[0].x, 70.0);
    assert_relative_eq!(curve[18].x, 160.0);
    for (i, p) in curve.iter().enumerate() {
        assert_relative_eq!(p.x, 70.0 + 5.0 * i as f64);
        assert_relative_eq!(p.y, report.predict(p.x));
    }
}

#[test]
fn test_custom_curve_range() {
    let report = QuadFit::new()
        .curve_range(0.0, 10.0)
        .curve_step(2.5)
        .build()
        .unwrap()
        .fit(&seed_points())
        .unwrap();

    let curve = report.curve.unwrap();
    assert_eq!(curve.len(), 5);
    assert_relative_eq!(curve[4].x, 10.0);
}

#[test]
fn test_skip_curve() {
    let report = QuadFit::new()
        .skip_curve()
        .build()
        .unwrap()
        .fit(&seed_points())
        .unwrap();
    assert!(report.curve.is_none());
}

// ============================================================================
// Optional Outputs
// ============================================================================

#[test]
fn test_residuals_and_verification() {
    let report = QuadFit::new()
        .return_residuals()
        .return_verification()
        .build()
        .unwrap()
        .fit(&seed_points())
        .unwrap();

    let residuals = report.residuals.as_ref().unwrap();
    assert_eq!(residuals.len(), 4);
    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    assert_relative_eq!(ss_res, 80.0, max_relative = 1e-9);

    let verification = report.verification.as_ref().unwrap();
    assert_eq!(verification.len(), 4);
    for (record, residual) in verification.iter().zip(residuals.iter()) {
        assert_relative_eq!(record.abs_error, residual.abs());
        assert_relative_eq!(record.actual - record.predicted, *residual);
    }
}

#[test]
fn test_optional_outputs_off_by_default() {
    let report = QuadFit::new().build().unwrap().fit(&seed_points()).unwrap();
    assert!(report.residuals.is_none());
    assert!(report.verification.is_none());
}

// ============================================================================
// Builder Validation
// ============================================================================

#[test]
fn test_duplicate_parameter_rejected() {
    let err = QuadFit::<f64>::new()
        .curve_step(5.0)
        .curve_step(2.0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        QuadFitError::DuplicateParameter {
            parameter: "curve_step"
        }
    );
}

#[test]
fn test_inverted_curve_range_rejected() {
    let err = QuadFit::new().curve_range(160.0, 70.0).build().unwrap_err();
    assert!(matches!(err, QuadFitError::InvalidCurveRange { .. }));
}

#[test]
fn test_non_positive_curve_step_rejected() {
    let err = QuadFit::new().curve_step(0.0).build().unwrap_err();
    assert_eq!(err, QuadFitError::InvalidCurveStep(0.0));

    let err = QuadFit::new().curve_step(-1.0).build().unwrap_err();
    assert_eq!(err, QuadFitError::InvalidCurveStep(-1.0));
}

// ============================================================================
// Input Validation
// ============================================================================

#[test]
fn test_non_finite_input_rejected() {
    let mut points = seed_points();
    points.set_y(2, f64::NAN).unwrap();

    let err = QuadFit::new().build().unwrap().fit(&points).unwrap_err();
    assert!(matches!(err, QuadFitError::InvalidNumericValue(_)));
}

// ============================================================================
// Degenerate Fits (documented non-finite propagation)
// ============================================================================

#[test]
fn test_constant_y_gives_non_finite_r_squared() {
    // SS_tot = 0: the division is performed anyway and must not panic.
    let points: PointSet<f64> = PointSet::from_points(vec![
        Point::new(1.0, 5.0),
        Point::new(2.0, 5.0),
        Point::new(3.0, 5.0),
        Point::new(4.0, 5.0),
    ])
    .unwrap();

    let report = QuadFit::new().build().unwrap().fit(&points).unwrap();
    assert!(
        !report.r_squared.is_finite(),
        "constant-y input must yield a non-finite R², got {}",
        report.r_squared
    );
}

#[test]
fn test_all_equal_x_gives_non_finite_coefficients() {
    // A single distinct x-value makes the normal matrix singular. The
    // solver divides through a zero pivot; the result is non-finite, not
    // a panic or an Err.
    let points = PointSet::from_points(vec![
        Point::new(1.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(1.0, 3.0),
    ])
    .unwrap();

    let report = QuadFit::new().build().unwrap().fit(&points).unwrap();
    assert!(!report.coefficients.is_finite());
}

// ============================================================================
// f32 Support
// ============================================================================

#[test]
fn test_f32_fit() {
    // Small x-values keep the unnormalized power sums within f32 precision.
    let points = PointSet::from_points(vec![
        Point::new(0.0f32, 3.0),
        Point::new(1.0, 6.0),
        Point::new(2.0, 11.0),
        Point::new(3.0, 18.0),
    ])
    .unwrap();

    // Exact data from y = x² + 2x + 3.
    let report = QuadFit::new().build().unwrap().fit(&points).unwrap();
    assert_relative_eq!(report.coefficients.a, 1.0, max_relative = 1e-4);
    assert_relative_eq!(report.coefficients.b, 2.0, max_relative = 1e-4);
    assert_relative_eq!(report.coefficients.c, 3.0, max_relative = 1e-4);
}
