//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer contains orchestration: fail-fast input/parameter validation
//! and the executor that runs a complete fit and assembles the report.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution and report assembly.
pub mod executor;

/// Input and parameter validation.
pub mod validator;
