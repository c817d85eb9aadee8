//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the regression
//! core:
//! - Power-sum (moment) accumulation for the normal equations
//! - A fixed-size Gaussian-elimination solver with partial pivoting
//!
//! These are reusable building blocks with no fitting-pipeline logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dense 3×3 linear solver (Gaussian elimination, partial pivoting).
pub mod linalg;

/// Power-sum accumulation for the normal equations.
pub mod moments;
