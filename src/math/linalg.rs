//! Dense 3×3 linear solver for the quadratic normal equations.
//!
//! ## Purpose
//!
//! This module solves the fixed-size 3×3 linear system produced by the
//! normal equations, using Gaussian elimination with partial pivoting.
//!
//! ## Design notes
//!
//! * **Algorithm**: Forward elimination with partial (row) pivoting,
//!   followed by back substitution.
//! * **Fixed size**: The system is always 3×3; stack arrays are used
//!   throughout, no allocation.
//! * **Generics**: Generic over `Float` types (f32 and f64).
//!
//! ## Invariants
//!
//! * The pivot row chosen for column `i` has the largest absolute value in
//!   that column among rows `i..3`.
//! * Row swaps apply to the matrix and right-hand side in lockstep.
//!
//! ## Non-goals
//!
//! * No singularity detection: a zero pivot divides through and the
//!   resulting non-finite values propagate to the caller.

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Elimination (3×3, partial pivoting)
// ============================================================================

/// Solve `matrix · solution = rhs` for a 3×3 system.
///
/// The inputs are consumed as working storage. A singular (or numerically
/// singular) matrix is not detected; division by a zero pivot yields
/// non-finite entries in the solution, which callers are expected to
/// surface rather than mask.
pub fn solve_3x3<T: Float>(mut matrix: [[T; 3]; 3], mut rhs: [T; 3]) -> [T; 3] {
    // Forward elimination with partial pivoting.
    for i in 0..3 {
        // Select the largest-magnitude pivot among rows i..3.
        let mut max_row = i;
        for k in (i + 1)..3 {
            if matrix[k][i].abs() > matrix[max_row][i].abs() {
                max_row = k;
            }
        }
        matrix.swap(i, max_row);
        rhs.swap(i, max_row);

        // Eliminate entries below the pivot.
        for k in (i + 1)..3 {
            let factor = matrix[k][i] / matrix[i][i];
            rhs[k] = rhs[k] - factor * rhs[i];
            for j in i..3 {
                matrix[k][j] = matrix[k][j] - factor * matrix[i][j];
            }
        }
    }

    // Back substitution.
    let mut solution = [T::zero(); 3];
    for i in (0..3).rev() {
        let mut acc = rhs[i];
        for j in (i + 1)..3 {
            acc = acc - matrix[i][j] * solution[j];
        }
        solution[i] = acc / matrix[i][i];
    }

    solution
}
