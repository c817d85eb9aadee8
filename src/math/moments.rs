//! Power-sum accumulation for the quadratic normal equations.
//!
//! ## Purpose
//!
//! This module accumulates the raw moments of a point set that the
//! least-squares quadratic fit needs: n, Σx, Σx², Σx³, Σx⁴, Σy, Σxy and
//! Σx²y, and assembles them into the 3×3 normal-equations system.
//!
//! ## Design notes
//!
//! * **Single pass**: All eight sums are accumulated in one loop.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The assembled system is a pure function of the multiset of points.
//!
//! ## Non-goals
//!
//! * This module does not solve the system (see `math::linalg`).
//! * This module does not validate inputs (see `engine::validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Point;

// ============================================================================
// PowerSums
// ============================================================================

/// Raw moments of a point set, up to the orders a quadratic fit requires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSums<T> {
    /// Number of points.
    pub n: usize,
    /// Σx
    pub sum_x: T,
    /// Σx²
    pub sum_x2: T,
    /// Σx³
    pub sum_x3: T,
    /// Σx⁴
    pub sum_x4: T,
    /// Σy
    pub sum_y: T,
    /// Σxy
    pub sum_xy: T,
    /// Σx²y
    pub sum_x2y: T,
}

impl<T: Float> PowerSums<T> {
    /// Accumulate all moments over `points` in a single pass.
    pub fn accumulate(points: &[Point<T>]) -> Self {
        let mut sums = Self {
            n: points.len(),
            sum_x: T::zero(),
            sum_x2: T::zero(),
            sum_x3: T::zero(),
            sum_x4: T::zero(),
            sum_y: T::zero(),
            sum_xy: T::zero(),
            sum_x2y: T::zero(),
        };

        for p in points {
            let x2 = p.x * p.x;
            sums.sum_x = sums.sum_x + p.x;
            sums.sum_x2 = sums.sum_x2 + x2;
            sums.sum_x3 = sums.sum_x3 + x2 * p.x;
            sums.sum_x4 = sums.sum_x4 + x2 * x2;
            sums.sum_y = sums.sum_y + p.y;
            sums.sum_xy = sums.sum_xy + p.x * p.y;
            sums.sum_x2y = sums.sum_x2y + x2 * p.y;
        }

        sums
    }

    /// Assemble the normal-equations system `M · [a, b, c]ᵀ = r`:
    ///
    /// ```text
    /// [ Σx⁴ Σx³ Σx² ] [a]   [ Σx²y ]
    /// [ Σx³ Σx² Σx  ] [b] = [ Σxy  ]
    /// [ Σx² Σx  n   ] [c]   [ Σy   ]
    /// ```
    #[inline]
    pub fn normal_equations(&self) -> ([[T; 3]; 3], [T; 3]) {
        let n = T::from(self.n).unwrap();
        let matrix = [
            [self.sum_x4, self.sum_x3, self.sum_x2],
            [self.sum_x3, self.sum_x2, self.sum_x],
            [self.sum_x2, self.sum_x, n],
        ];
        let rhs = [self.sum_x2y, self.sum_xy, self.sum_y];
        (matrix, rhs)
    }
}
