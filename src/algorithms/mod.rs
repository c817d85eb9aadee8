//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the regression core: normal-equations assembly,
//! coefficient solving, and polynomial evaluation.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares quadratic regression and evaluation.
pub mod regression;
