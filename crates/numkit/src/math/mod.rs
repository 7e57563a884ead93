//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout numkit:
//! - Accumulation methods for floating-point summation
//! - The log-gamma function and binomial coefficients built on it
//!
//! These are reusable numerical building blocks with no configuration or
//! orchestration logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Floating-point accumulation methods.
pub mod accumulate;

/// Log-gamma and binomial coefficients.
pub mod gamma;
