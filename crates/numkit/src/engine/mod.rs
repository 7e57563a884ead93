//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides orchestration and execution control: validation of
//! configuration and strict-mode arguments, and the reduction passes with
//! their trace and parallel dispatch.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Reduction passes and trace hooks.
pub mod executor;

/// Configuration and strict-mode validation.
pub mod validator;
