#![cfg(feature = "dev")]
//! Tests for the log-gamma and binomial coefficient functions.
//!
//! These tests verify the Lanczos approximation against closed-form
//! reference values, the reflection formula on the negative axis, pole
//! behavior, and the binomial identities built on top.
//!
//! ## Test Organization
//!
//! 1. **Reference Values** - Half-integer and factorial identities
//! 2. **Poles & Specials** - Non-positive integers, NaN, infinities
//! 3. **Reflection** - Negative non-integer arguments
//! 4. **Binomial** - Symmetry, Pascal recurrence, overflow behavior

use approx::assert_relative_eq;
use std::f64::consts::PI;

use numkit::internals::math::gamma::{binomial, ln_binomial, ln_gamma};

// ============================================================================
// Reference Value Tests
// ============================================================================

/// Test ln_gamma at 1/2: Gamma(1/2) = sqrt(pi).
#[test]
fn test_ln_gamma_half() {
    assert_relative_eq!(ln_gamma(0.5), PI.sqrt().ln(), max_relative = 1e-12);
}

/// Test the factorial identity Gamma(n + 1) = n!.
#[test]
fn test_ln_gamma_factorials() {
    let mut factorial = 1.0_f64;
    for n in 1..=20 {
        factorial *= n as f64;
        assert_relative_eq!(
            ln_gamma(n as f64 + 1.0),
            factorial.ln(),
            max_relative = 1e-12
        );
    }
}

/// Test fixed points: Gamma(1) = Gamma(2) = 1, so the log is zero.
#[test]
fn test_ln_gamma_fixed_points() {
    assert_relative_eq!(ln_gamma(1.0), 0.0, epsilon = 1e-13);
    assert_relative_eq!(ln_gamma(2.0), 0.0, epsilon = 1e-13);
}

/// Test the recurrence ln Gamma(x + 1) = ln Gamma(x) + ln x.
#[test]
fn test_ln_gamma_recurrence() {
    for x in [0.7, 1.3, 2.9, 7.5, 33.25, 120.0] {
        assert_relative_eq!(
            ln_gamma(x + 1.0),
            ln_gamma(x) + x.ln(),
            max_relative = 1e-12
        );
    }
}

// ============================================================================
// Pole & Special Value Tests
// ============================================================================

/// Test that the poles at non-positive integers evaluate to +inf.
#[test]
fn test_ln_gamma_poles() {
    for x in [0.0, -1.0, -2.0, -10.0, -100.0] {
        assert_eq!(ln_gamma(x), f64::INFINITY);
    }
}

/// Test IEEE special propagation.
#[test]
fn test_ln_gamma_specials() {
    assert!(ln_gamma(f64::NAN).is_nan());
    assert_eq!(ln_gamma(f64::INFINITY), f64::INFINITY);
    assert_eq!(ln_gamma(f64::NEG_INFINITY), f64::INFINITY);
}

// ============================================================================
// Reflection Tests
// ============================================================================

/// Test the reflection formula on negative non-integers.
///
/// Gamma(-1/2) = -2 sqrt(pi); ln_gamma returns the log of the absolute
/// value, matching C's lgamma.
#[test]
fn test_ln_gamma_negative_half() {
    assert_relative_eq!(
        ln_gamma(-0.5),
        (2.0 * PI.sqrt()).ln(),
        max_relative = 1e-12
    );
}

/// Test the reflection identity ln|G(x)| + ln|G(1-x)| = ln|pi / sin(pi x)|.
#[test]
fn test_ln_gamma_reflection_identity() {
    for x in [-0.3, -1.7, -4.25, 0.2] {
        let lhs = ln_gamma(x) + ln_gamma(1.0 - x);
        let rhs = (PI / (PI * x).sin()).abs().ln();
        assert_relative_eq!(lhs, rhs, max_relative = 1e-10);
    }
}

// ============================================================================
// Binomial Tests
// ============================================================================

/// Test binomial symmetry C(n, k) = C(n, n - k).
#[test]
fn test_binomial_symmetry() {
    for (n, k) in [(10.0, 3.0), (25.0, 11.0), (100.0, 42.0)] {
        assert_relative_eq!(binomial(n, k), binomial(n, n - k), max_relative = 1e-10);
    }
}

/// Test the Pascal recurrence C(n, k) = C(n-1, k-1) + C(n-1, k).
#[test]
fn test_binomial_pascal_recurrence() {
    for (n, k) in [(8.0, 3.0), (15.0, 6.0), (30.0, 14.0)] {
        assert_relative_eq!(
            binomial(n, k),
            binomial(n - 1.0, k - 1.0) + binomial(n - 1.0, k),
            max_relative = 1e-9
        );
    }
}

/// Test exact small coefficients within the stated tolerance.
#[test]
fn test_binomial_small_values() {
    assert_relative_eq!(binomial(5.0, 2.0), 10.0, epsilon = 1e-6);
    assert_relative_eq!(binomial(6.0, 3.0), 20.0, epsilon = 1e-6);
    assert_relative_eq!(binomial(0.0, 0.0), 1.0, epsilon = 1e-6);
}

/// Test that the log form stays finite where the linear form overflows.
#[test]
fn test_binomial_overflow_behavior() {
    let ln = ln_binomial(2000.0, 1000.0);
    assert!(ln.is_finite());
    assert!(binomial(2000.0, 1000.0).is_infinite());

    // Well inside the range, both forms are finite and consistent
    let mid = ln_binomial(1000.0, 500.0);
    assert!(mid.is_finite());
    assert!(binomial(1000.0, 500.0).is_finite());
}

/// Test real-valued (non-integer) arguments against the gamma identity.
#[test]
fn test_binomial_real_arguments() {
    let n = 7.5;
    let k = 2.25;
    let expected = ln_gamma(n + 1.0) - ln_gamma(n - k + 1.0) - ln_gamma(k + 1.0);
    assert_eq!(ln_binomial(n, k), expected);
}
