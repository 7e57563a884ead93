//! Error types for numkit operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while reducing
//! buffers or evaluating binomial coefficients, including buffer geometry
//! violations, strict-mode domain violations, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., actual length
//!   vs. expected `rows * cols`).
//! * **Deferred**: Builder misuse is recorded during configuration and
//!   surfaced at `build()`.
//! * **No-std**: All variants carry only scalars and `&'static str`, so no
//!   allocation is needed in any environment.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Buffer geometry**: Length must equal `rows * cols`; the product must
//!    be addressable.
//! 2. **Domain validation**: Strict mode requires finite `0 <= k <= n`.
//! 3. **Builder constraints**: Each parameter may be configured once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not cover the C boundary's status codes; those live in
//!   the binding crate.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for numkit operations.
#[derive(Debug, Clone, PartialEq)]
pub enum NumkitError {
    /// Buffer length does not match the product of the stated dimensions.
    ShapeMismatch {
        /// Number of rows stated by the caller.
        rows: usize,
        /// Number of columns stated by the caller.
        cols: usize,
        /// Actual number of elements in the buffer.
        len: usize,
    },

    /// `rows * cols` does not fit in `usize`, so no buffer can hold it.
    DimensionOverflow {
        /// Number of rows stated by the caller.
        rows: usize,
        /// Number of columns stated by the caller.
        cols: usize,
    },

    /// Binomial arguments rejected by strict-mode domain validation.
    OutOfDomain {
        /// The `n` argument as provided.
        n: f64,
        /// The `k` argument as provided.
        k: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for NumkitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ShapeMismatch { rows, cols, len } => {
                write!(
                    f,
                    "Shape mismatch: buffer has {len} elements, expected {rows} x {cols}"
                )
            }
            Self::DimensionOverflow { rows, cols } => {
                write!(f, "Dimension overflow: {rows} x {cols} exceeds usize")
            }
            Self::OutOfDomain { n, k } => {
                write!(
                    f,
                    "Binomial domain violation: n = {n}, k = {k} (strict mode requires finite 0 <= k <= n)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for NumkitError {}
