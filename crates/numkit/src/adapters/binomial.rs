//! Binomial adapter for coefficient evaluation.
//!
//! ## Purpose
//!
//! This module provides the binomial coefficient evaluator built on the
//! log-gamma function, with the legacy propagate-everything semantics by
//! default and opt-in strict domain validation.
//!
//! ## Design notes
//!
//! * **Legacy-compatible**: Without strict mode, no argument is rejected;
//!   out-of-domain inputs produce whatever the gamma evaluations produce
//!   (infinities, NaN, or nonsensical finite values), exactly like the
//!   C `lgamma`/`exp` chain this replaces.
//! * **Strict mode**: Validates finite `0 <= k <= n` before evaluating and
//!   fails with `OutOfDomain` instead of propagating.
//!
//! ## Key concepts
//!
//! * **ln_coefficient**: `ln C(n, k)` as a three-term log-gamma difference.
//! * **coefficient**: `exp` of the above.
//!
//! ## Invariants
//!
//! * In the default mode both operations always return `Ok`.
//! * Strict mode rejects exactly the arguments for which the log-gamma
//!   terms would not all be finite.
//!
//! ## Non-goals
//!
//! * This adapter does not compute exact integer coefficients; results are
//!   `f64` approximations accurate to the tolerance of the Lanczos series.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::gamma;
use crate::primitives::errors::NumkitError;

// ============================================================================
// Binomial Builder
// ============================================================================

/// Builder for the binomial coefficient evaluator.
#[derive(Debug, Clone)]
pub struct BinomialBuilder {
    /// Whether strict-mode domain validation runs before evaluation.
    pub strict_domain: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for BinomialBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinomialBuilder {
    /// Create a new binomial builder with default parameters.
    fn new() -> Self {
        Self {
            strict_domain: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Enable or disable strict-mode domain validation.
    pub fn strict_domain(mut self, enabled: bool) -> Self {
        self.strict_domain = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the binomial evaluator.
    pub fn build(self) -> Result<BinomialEstimator, NumkitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BinomialEstimator { config: self })
    }
}

// ============================================================================
// Binomial Estimator
// ============================================================================

/// Binomial coefficient evaluator.
pub struct BinomialEstimator {
    config: BinomialBuilder,
}

impl BinomialEstimator {
    /// Natural logarithm of the binomial coefficient `C(n, k)`.
    ///
    /// In strict mode, fails with [`NumkitError::OutOfDomain`] unless the
    /// arguments are finite and satisfy `0 <= k <= n`. In the default mode
    /// this always returns `Ok`, propagating IEEE special values.
    pub fn ln_coefficient(&self, n: f64, k: f64) -> Result<f64, NumkitError> {
        if self.config.strict_domain {
            Validator::validate_binomial_domain(n, k)?;
        }
        Ok(gamma::ln_binomial(n, k))
    }

    /// Binomial coefficient `C(n, k)`.
    ///
    /// Identical domain behavior to [`ln_coefficient`](Self::ln_coefficient);
    /// the value is `exp` of the log coefficient and overflows to `+inf`
    /// beyond the f64 range.
    pub fn coefficient(&self, n: f64, k: f64) -> Result<f64, NumkitError> {
        if self.config.strict_domain {
            Validator::validate_binomial_domain(n, k)?;
        }
        Ok(gamma::binomial(n, k))
    }

    /// Whether strict-mode domain validation is enabled.
    pub fn is_strict(&self) -> bool {
        self.config.strict_domain
    }
}
