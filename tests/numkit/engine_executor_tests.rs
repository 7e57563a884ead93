#![cfg(feature = "dev")]
//! Tests for the reduction execution engine.
//!
//! These tests verify the summation passes over slices and matrix views,
//! the per-element trace hook, and the chunked parallel path.
//!
//! ## Test Organization
//!
//! 1. **Slice Passes** - 1-D sums under each configuration
//! 2. **View Passes** - 2-D sums, layout invariance
//! 3. **Tracing** - Event order, completeness, forced sequential path
//! 4. **Parallel** - Agreement with the sequential result (feature-gated)

use std::sync::Mutex;

use approx::assert_relative_eq;

use numkit::internals::engine::executor::{self, ReduceConfig, TraceEvent};
use numkit::internals::math::accumulate::Accumulation;
use numkit::internals::primitives::view::{MatrixLayout, MatrixView};

// ============================================================================
// Slice Pass Tests
// ============================================================================

/// Test the default configuration over a plain slice.
#[test]
fn test_sum_slice_default() {
    let config = ReduceConfig::default();
    assert_eq!(executor::sum_slice(&config, &[1.0, 2.0, 3.5]), 6.5);
    assert_eq!(executor::sum_slice::<f64>(&config, &[]), 0.0);
}

/// Test integer widening through the executor.
#[test]
fn test_sum_slice_widens() {
    let config = ReduceConfig::default();
    let values: [i64; 3] = [1, -2, 4];
    assert_eq!(executor::sum_slice(&config, &values), 3.0);
}

/// Test that the configured accumulation method is honored.
#[test]
fn test_sum_slice_compensated() {
    let config = ReduceConfig {
        accumulation: Accumulation::Compensated,
        ..ReduceConfig::default()
    };
    let mut values = vec![1.0e16];
    values.extend(std::iter::repeat_n(1.0, 1000));

    let total = executor::sum_slice(&config, &values);
    assert_relative_eq!(total - 1.0e16, 1000.0, epsilon = 2.0);
}

// ============================================================================
// View Pass Tests
// ============================================================================

/// Test that a view sum equals the flat sum under either layout.
#[test]
fn test_sum_view_layout_invariant() {
    let values: Vec<f64> = (1..=12).map(f64::from).collect();
    let expected: f64 = values.iter().sum();
    let config = ReduceConfig::default();

    for layout in [MatrixLayout::RowMajor, MatrixLayout::ColumnMajor] {
        let view = MatrixView::new(&values, 3, 4, layout).unwrap();
        assert_eq!(executor::sum_view(&config, &view), expected);
    }
}

/// Test that empty views short-circuit to zero.
#[test]
fn test_sum_view_empty() {
    let values: [f64; 0] = [];
    let view = MatrixView::new(&values, 0, 9, MatrixLayout::default()).unwrap();
    assert_eq!(executor::sum_view(&ReduceConfig::default(), &view), 0.0);
}

// ============================================================================
// Tracing Tests
// ============================================================================

static SLICE_EVENTS: Mutex<Vec<TraceEvent>> = Mutex::new(Vec::new());

fn record_slice_event(event: &TraceEvent) {
    SLICE_EVENTS.lock().unwrap().push(*event);
}

/// Test that 1-D traces fire once per element, in order, with row 0.
#[test]
fn test_trace_slice_order() {
    let config = ReduceConfig {
        trace: Some(record_slice_event),
        ..ReduceConfig::default()
    };

    let total = executor::sum_slice(&config, &[10.0, 20.0, 30.0]);
    assert_eq!(total, 60.0);

    let events = SLICE_EVENTS.lock().unwrap();
    assert_eq!(events.len(), 3);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.row, 0);
        assert_eq!(event.col, i);
        assert_eq!(event.value, (i as f64 + 1.0) * 10.0);
    }
}

static VIEW_EVENTS: Mutex<Vec<TraceEvent>> = Mutex::new(Vec::new());

fn record_view_event(event: &TraceEvent) {
    VIEW_EVENTS.lock().unwrap().push(*event);
}

/// Test that 2-D traces walk logical positions row by row, reproducing
/// the legacy visit order regardless of the storage layout.
#[test]
fn test_trace_view_row_by_row() {
    // Logical matrix [[1, 2, 3], [4, 5, 6]] stored column-major
    let values = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let view = MatrixView::new(&values, 2, 3, MatrixLayout::ColumnMajor).unwrap();
    let config = ReduceConfig {
        trace: Some(record_view_event),
        // The trace must force the sequential path even with the hint set
        parallel: true,
        ..ReduceConfig::default()
    };

    let total = executor::sum_view(&config, &view);
    assert_eq!(total, 21.0);

    let events = VIEW_EVENTS.lock().unwrap();
    let positions: Vec<(usize, usize)> = events.iter().map(|e| (e.row, e.col)).collect();
    assert_eq!(
        positions,
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
    );
    let seen: Vec<f64> = events.iter().map(|e| e.value).collect();
    assert_eq!(seen, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

// ============================================================================
// Parallel Tests
// ============================================================================

/// Test that the chunked parallel path agrees with the sequential result.
#[cfg(feature = "parallel")]
#[test]
fn test_parallel_agrees_with_sequential() {
    let values: Vec<f64> = (0..50_000).map(|i| (i as f64 * 0.001).sin()).collect();

    let sequential = executor::sum_slice(&ReduceConfig::default(), &values);
    let parallel = executor::sum_slice(
        &ReduceConfig {
            parallel: true,
            ..ReduceConfig::default()
        },
        &values,
    );

    assert_relative_eq!(sequential, parallel, max_relative = 1e-10);
}

/// Test that small buffers ignore the parallel hint without changing the
/// result.
#[cfg(feature = "parallel")]
#[test]
fn test_parallel_small_buffer_fallback() {
    let values = [1.0, 2.0, 3.0];
    let config = ReduceConfig {
        parallel: true,
        ..ReduceConfig::default()
    };
    assert_eq!(executor::sum_slice(&config, &values), 6.0);
}
