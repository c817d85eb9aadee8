//! Point data model for quadratic fitting.
//!
//! ## Purpose
//!
//! This module defines the caller-owned data model: a single `(x, y)`
//! observation and an ordered collection of observations with a minimum
//! size suitable for a unique quadratic fit.
//!
//! ## Design notes
//!
//! * **Ownership**: The fitting engine borrows points immutably and never
//!   mutates them; all mutation goes through `PointSet`'s own methods.
//! * **Minimum size**: Three points determine a unique quadratic. Removal
//!   below that floor is refused rather than silently ignored.
//! * **Generics**: Generic over `Float` (f32/f64).
//!
//! ## Invariants
//!
//! * A `PointSet` built through the checked constructors always holds at
//!   least [`MIN_POINTS`] points.
//! * Point order is preserved; indices are stable until a removal.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::QuadFitError;

/// Minimum number of points for a unique quadratic fit.
///
/// Fewer points leave the normal-equations system under-determined.
pub const MIN_POINTS: usize = 3;

// ============================================================================
// Point
// ============================================================================

/// A single `(x, y)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T> {
    /// Predictor value.
    pub x: T,
    /// Observed response value.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a point from its coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// PointSet
// ============================================================================

/// An ordered collection of observations, at least [`MIN_POINTS`] long.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T> {
    points: Vec<Point<T>>,
}

impl<T: Float> PointSet<T> {
    /// Create a point set from a vector of points.
    ///
    /// Fails with [`QuadFitError::TooFewPoints`] when fewer than
    /// [`MIN_POINTS`] points are supplied, or [`QuadFitError::EmptyInput`]
    /// when the vector is empty.
    pub fn from_points(points: Vec<Point<T>>) -> Result<Self, QuadFitError> {
        if points.is_empty() {
            return Err(QuadFitError::EmptyInput);
        }
        if points.len() < MIN_POINTS {
            return Err(QuadFitError::TooFewPoints {
                got: points.len(),
                min: MIN_POINTS,
            });
        }
        Ok(Self { points })
    }

    /// Create a point set from parallel x/y slices.
    pub fn from_slices(x: &[T], y: &[T]) -> Result<Self, QuadFitError> {
        if x.len() != y.len() {
            return Err(QuadFitError::InvalidNumericValue(format!(
                "x has {} values, y has {}",
                x.len(),
                y.len()
            )));
        }
        let points = x
            .iter()
            .zip(y.iter())
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        Self::from_points(points)
    }

    /// The default 4-point seed set used by the launcher-speed calculator
    /// this crate was extracted from.
    pub fn seed() -> Self {
        let f = |v: f64| T::from(v).unwrap();
        Self {
            points: vec![
                Point::new(f(75.0), f(1080.0)),
                Point::new(f(100.0), f(1240.0)),
                Point::new(f(125.0), f(1340.0)),
                Point::new(f(150.0), f(1420.0)),
            ],
        }
    }

    /// Number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty. Always `false` for a checked-constructed
    /// set; provided for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the points in order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Iterate over the points in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// Copy out the point at `index`.
    pub fn get(&self, index: usize) -> Result<Point<T>, QuadFitError> {
        self.points
            .get(index)
            .copied()
            .ok_or(QuadFitError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            })
    }

    /// Append a new point at the origin, ready to be edited in place.
    pub fn add_point(&mut self) {
        self.points.push(Point::new(T::zero(), T::zero()));
    }

    /// Append a specific point.
    pub fn push(&mut self, point: Point<T>) {
        self.points.push(point);
    }

    /// Set the x value of the point at `index`.
    pub fn set_x(&mut self, index: usize, x: T) -> Result<(), QuadFitError> {
        let len = self.points.len();
        match self.points.get_mut(index) {
            Some(p) => {
                p.x = x;
                Ok(())
            }
            None => Err(QuadFitError::IndexOutOfBounds { index, len }),
        }
    }

    /// Set the y value of the point at `index`.
    pub fn set_y(&mut self, index: usize, y: T) -> Result<(), QuadFitError> {
        let len = self.points.len();
        match self.points.get_mut(index) {
            Some(p) => {
                p.y = y;
                Ok(())
            }
            None => Err(QuadFitError::IndexOutOfBounds { index, len }),
        }
    }

    /// Remove the point at `index`.
    ///
    /// Refused with [`QuadFitError::MinimumPointsReached`] when the set is
    /// already at the [`MIN_POINTS`] floor.
    pub fn remove_point(&mut self, index: usize) -> Result<Point<T>, QuadFitError> {
        if self.points.len() <= MIN_POINTS {
            return Err(QuadFitError::MinimumPointsReached {
                len: self.points.len(),
            });
        }
        if index >= self.points.len() {
            return Err(QuadFitError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            });
        }
        Ok(self.points.remove(index))
    }
}

impl<T: Float> Default for PointSet<T> {
    fn default() -> Self {
        Self::seed()
    }
}

impl<'a, T> IntoIterator for &'a PointSet<T> {
    type Item = &'a Point<T>;
    type IntoIter = core::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
