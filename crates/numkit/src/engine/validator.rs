//! Input validation for numkit configuration and strict-mode arguments.
//!
//! ## Purpose
//!
//! This module provides the validation functions invoked by the adapter
//! builders: builder misuse checks and the strict-mode domain checks for
//! binomial arguments.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Opt-in**: Domain validation runs only in strict mode; the default
//!   binomial path never calls it.
//!
//! ## Key concepts
//!
//! * **Builder constraints**: Each parameter may be configured once.
//! * **Domain bounds**: Strict mode requires finite `0 <= k <= n`.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * Arguments that pass `validate_binomial_domain` produce finite
//!   `ln_gamma` terms.
//!
//! ## Non-goals
//!
//! * This module does not check buffer geometry; a `MatrixView` can only be
//!   constructed shape-checked.
//! * This module does not perform the reduction or evaluation itself.

// Internal dependencies
use crate::primitives::errors::NumkitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for numkit configuration and arguments.
///
/// Provides static methods returning `Result<(), NumkitError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), NumkitError> {
        if let Some(param) = duplicate_param {
            return Err(NumkitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    /// Validate binomial arguments under strict-mode rules.
    pub fn validate_binomial_domain(n: f64, k: f64) -> Result<(), NumkitError> {
        // Check 1: Both arguments finite
        if !n.is_finite() || !k.is_finite() {
            return Err(NumkitError::OutOfDomain { n, k });
        }

        // Check 2: Non-negative arguments
        if n < 0.0 || k < 0.0 {
            return Err(NumkitError::OutOfDomain { n, k });
        }

        // Check 3: k within [0, n]
        if k > n {
            return Err(NumkitError::OutOfDomain { n, k });
        }

        Ok(())
    }
}
