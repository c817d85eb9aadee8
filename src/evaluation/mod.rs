//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer contains post-fit diagnostics: the R² goodness-of-fit score,
//! residuals, and the per-point verification table.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-fit metrics and verification records.
pub mod diagnostics;
