//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution adapters: concrete builders with
//! defaults and the processors they construct. The generic API builder
//! hands off to one of these through its adapter marker.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Buffer summation.
pub mod reduce;

/// Binomial coefficient evaluation.
pub mod binomial;
