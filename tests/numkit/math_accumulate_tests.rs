#![cfg(feature = "dev")]
//! Tests for the floating-point accumulation methods.
//!
//! These tests verify the sequential and Kahan-compensated summation
//! kernels, element widening, and the running accumulator state.
//!
//! ## Test Organization
//!
//! 1. **Sequential** - Agreement with the mathematical sum
//! 2. **Compensated** - Retention of low-order contributions
//! 3. **Widening** - Integer and f32 element types
//! 4. **Accumulator** - Incremental state behavior

use approx::{assert_abs_diff_eq, assert_relative_eq};

use numkit::internals::math::accumulate::{Accumulation, Accumulator};

// ============================================================================
// Sequential Tests
// ============================================================================

/// Test the sequential sum against a hand-computed total.
#[test]
fn test_sequential_matches_manual_sum() {
    let values = [1.5, -2.25, 4.0, 0.75];
    assert_eq!(Accumulation::Sequential.sum_slice(&values), 4.0);
}

/// Test that the empty slice sums to exactly zero under both methods.
#[test]
fn test_empty_slice_is_zero() {
    let values: [f64; 0] = [];
    assert_eq!(Accumulation::Sequential.sum_slice(&values), 0.0);
    assert_eq!(Accumulation::Compensated.sum_slice(&values), 0.0);
}

/// Test that the two methods agree on well-conditioned data.
#[test]
fn test_methods_agree_on_well_conditioned_data() {
    let values: Vec<f64> = (0..1000).map(|i| (i as f64).sin()).collect();
    assert_relative_eq!(
        Accumulation::Sequential.sum_slice(&values),
        Accumulation::Compensated.sum_slice(&values),
        max_relative = 1e-12
    );
}

// ============================================================================
// Compensated Tests
// ============================================================================

/// Test that compensation retains contributions a naive sum drops.
///
/// At a running total of 1e16, unit increments fall below the rounding
/// granularity; the naive sum never moves while the compensated sum
/// carries them in the correction term.
#[test]
fn test_compensated_retains_small_increments() {
    let mut values = vec![1.0e16];
    values.extend(std::iter::repeat_n(1.0, 10_000));

    let naive = Accumulation::Sequential.sum_slice(&values);
    let compensated = Accumulation::Compensated.sum_slice(&values);

    assert_eq!(naive, 1.0e16);
    assert_abs_diff_eq!(compensated - 1.0e16, 10_000.0, epsilon = 2.0);
}

/// Test compensation on many tiny increments.
#[test]
fn test_compensated_tiny_increments() {
    let values: Vec<f64> = std::iter::once(1.0e10)
        .chain(std::iter::repeat_n(1.0e-6, 10_000))
        .collect();

    let compensated = Accumulation::Compensated.sum_slice(&values);
    assert_abs_diff_eq!(compensated - 1.0e10, 0.01, epsilon = 1e-5);
}

/// Test that NaN flows through the compensated arithmetic.
#[test]
fn test_compensated_nan_propagates() {
    assert!(Accumulation::Compensated.sum_slice(&[1.0, f64::NAN]).is_nan());
}

// ============================================================================
// Widening Tests
// ============================================================================

/// Test i64 elements widened to f64 before the first addition.
#[test]
fn test_i64_widening() {
    let values: [i64; 3] = [2_000_000_000, 2_000_000_000, -1];
    assert_eq!(Accumulation::Sequential.sum_slice(&values), 3_999_999_999.0);
}

/// Test f32 elements widened to f64.
#[test]
fn test_f32_widening() {
    let values: [f32; 4] = [0.5, 0.25, 0.125, 0.0625];
    assert_eq!(Accumulation::Sequential.sum_slice(&values), 0.9375);
}

// ============================================================================
// Accumulator Tests
// ============================================================================

/// Test incremental accumulation matches the one-shot fold.
#[test]
fn test_accumulator_incremental() {
    let values = [3.0, 1.0, 4.0, 1.0, 5.0];

    let mut acc = Accumulator::new(Accumulation::Sequential);
    for v in values {
        acc.add(v);
    }

    assert_eq!(acc.total(), Accumulation::Sequential.sum_slice(&values));
    assert_eq!(acc.method(), Accumulation::Sequential);
}

/// Test method names and the default method.
#[test]
fn test_method_names_and_default() {
    assert_eq!(Accumulation::Sequential.name(), "sequential");
    assert_eq!(Accumulation::Compensated.name(), "compensated");
    assert_eq!(Accumulation::default(), Accumulation::Sequential);
}
