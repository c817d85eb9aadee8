//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures used throughout the
//! crate:
//! - The `(x, y)` point data model and its ordered collection
//! - The error taxonomy
//!
//! These carry no fitting logic of their own.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for fitting and validation.
pub mod errors;

/// Point and point-set data model.
pub mod point;
