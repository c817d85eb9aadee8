#![cfg(feature = "dev")]
//! Tests for the 3×3 Gaussian-elimination solver.
//!
//! Fixtures were cross-checked with exact rational arithmetic.

use approx::assert_relative_eq;

use quadfit_rs::internals::math::linalg::solve_3x3;

#[test]
fn test_identity_system() {
    let matrix = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    let rhs = [4.0, -2.0, 7.5];
    let solution = solve_3x3(matrix, rhs);
    assert_eq!(solution, rhs);
}

#[test]
fn test_known_system() {
    // M · [4, -2, 5]ᵀ = [11, 8, 4]ᵀ
    let matrix = [[2.0, 1.0, 1.0], [1.0, 3.0, 2.0], [1.0, 0.0, 0.0]];
    let rhs = [11.0, 8.0, 4.0];
    let [x0, x1, x2] = solve_3x3(matrix, rhs);
    assert_relative_eq!(x0, 4.0, max_relative = 1e-12);
    assert_relative_eq!(x1, -2.0, max_relative = 1e-12);
    assert_relative_eq!(x2, 5.0, max_relative = 1e-12);
}

#[test]
fn test_zero_leading_pivot_requires_row_swap() {
    // Naive elimination would divide by matrix[0][0] = 0; partial pivoting
    // must swap a larger row into place first.
    let matrix = [[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 9.0]];
    let rhs = [8.0, 26.0, 47.0]; // solution [1, 2, 3]
    let [x0, x1, x2] = solve_3x3(matrix, rhs);
    assert_relative_eq!(x0, 1.0, max_relative = 1e-12);
    assert_relative_eq!(x1, 2.0, max_relative = 1e-12);
    assert_relative_eq!(x2, 3.0, max_relative = 1e-12);
}

#[test]
fn test_row_order_does_not_change_solution() {
    let rows = [
        ([2.0, 1.0, 1.0], 11.0),
        ([1.0, 3.0, 2.0], 8.0),
        ([1.0, 0.0, 0.0], 4.0),
    ];
    let base = solve_3x3(
        [rows[0].0, rows[1].0, rows[2].0],
        [rows[0].1, rows[1].1, rows[2].1],
    );
    let permuted = solve_3x3(
        [rows[2].0, rows[0].0, rows[1].0],
        [rows[2].1, rows[0].1, rows[1].1],
    );
    for (a, b) in base.iter().zip(permuted.iter()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-12);
    }
}

#[test]
fn test_singular_system_propagates_non_finite() {
    // Rank-1 matrix: elimination reaches a zero pivot and divides anyway.
    let matrix = [[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]];
    let rhs = [1.0, 2.0, 3.0];
    let solution = solve_3x3(matrix, rhs);
    assert!(
        solution.iter().any(|v: &f64| !v.is_finite()),
        "singular system must yield non-finite values, got {:?}",
        solution
    );
}

#[test]
fn test_f32_system() {
    let matrix = [[2.0f32, 1.0, 1.0], [1.0, 3.0, 2.0], [1.0, 0.0, 0.0]];
    let rhs = [11.0f32, 8.0, 4.0];
    let [x0, x1, x2] = solve_3x3(matrix, rhs);
    assert_relative_eq!(x0, 4.0, max_relative = 1e-5);
    assert_relative_eq!(x1, -2.0, max_relative = 1e-5);
    assert_relative_eq!(x2, 5.0, max_relative = 1e-5);
}
