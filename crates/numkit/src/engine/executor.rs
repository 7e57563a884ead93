//! Execution engine for reduction passes.
//!
//! ## Purpose
//!
//! This module runs the actual summation passes over 1-D slices and 2-D
//! matrix views. It owns the per-element trace hook, the parallel chunking
//! strategy, and the dispatch between them.
//!
//! ## Design notes
//!
//! * Without a trace, the 2-D pass walks the flat buffer directly: the sum
//!   treats addition as associative, so the visit order is free and the
//!   cache-friendly order wins.
//! * With a trace installed, the pass walks logical positions row-by-row
//!   (outer loop over rows), reproducing the legacy per-element output
//!   order, and the parallel hint is ignored.
//! * The parallel path folds fixed-size chunks and combines the partials
//!   with the same accumulation method as the chunks themselves.
//!
//! ## Invariants
//!
//! * Shapes are validated before execution; the executor never re-checks.
//! * No allocation happens on the sequential paths.
//! * Trace events fire exactly once per element, in visit order.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not decide layouts; views carry their own.

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::AsPrimitive;

// Internal dependencies
use crate::math::accumulate::{Accumulation, Accumulator};
use crate::primitives::view::MatrixView;

// ============================================================================
// Type Definitions
// ============================================================================

/// One element visited during a reduction pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceEvent {
    /// Logical row (always 0 for 1-D passes).
    pub row: usize,
    /// Logical column, or the index for 1-D passes.
    pub col: usize,
    /// The element value after widening to f64.
    pub value: f64,
}

/// Observer invoked once per element, in visit order.
pub type TraceFn = fn(&TraceEvent);

/// Configuration for reduction passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReduceConfig {
    /// Accumulation method for the running total.
    pub accumulation: Accumulation,

    /// Per-element observer. Installing one forces the sequential path.
    pub trace: Option<TraceFn>,

    /// Chunked parallel reduction hint. Takes effect only when the
    /// `parallel` feature is compiled in; ignored otherwise.
    pub parallel: bool,
}

// Chunk length for the parallel path, and the minimum buffer size before
// splitting pays for itself.
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 4096;

// ============================================================================
// Reduction Passes
// ============================================================================

/// Sum a 1-D slice under the given configuration.
///
/// Elements are widened to `f64` before the first addition; the total is
/// accumulated entirely in `f64`. An empty slice sums to exactly `0.0`.
pub fn sum_slice<T>(config: &ReduceConfig, values: &[T]) -> f64
where
    T: AsPrimitive<f64> + Sync,
{
    if let Some(trace) = config.trace {
        let mut acc = Accumulator::new(config.accumulation);
        for (i, v) in values.iter().enumerate() {
            let value = v.as_();
            trace(&TraceEvent {
                row: 0,
                col: i,
                value,
            });
            acc.add(value);
        }
        return acc.total();
    }

    #[cfg(feature = "parallel")]
    if config.parallel && values.len() >= PARALLEL_CHUNK {
        return sum_chunked(config.accumulation, values);
    }

    config.accumulation.sum_slice(values)
}

/// Sum every element of a matrix view under the given configuration.
///
/// A zero-row or zero-column view sums to exactly `0.0`.
pub fn sum_view<T>(config: &ReduceConfig, view: &MatrixView<'_, T>) -> f64
where
    T: AsPrimitive<f64> + Sync,
{
    if view.is_empty() {
        return 0.0;
    }

    if let Some(trace) = config.trace {
        let mut acc = Accumulator::new(config.accumulation);
        for row in 0..view.rows() {
            for col in 0..view.cols() {
                let value = view.get(row, col).as_();
                trace(&TraceEvent { row, col, value });
                acc.add(value);
            }
        }
        return acc.total();
    }

    #[cfg(feature = "parallel")]
    if config.parallel && view.len() >= PARALLEL_CHUNK {
        return sum_chunked(config.accumulation, view.as_slice());
    }

    config.accumulation.sum_slice(view.as_slice())
}

// Parallel fold: per-chunk totals, combined with the same method.
#[cfg(feature = "parallel")]
fn sum_chunked<T>(accumulation: Accumulation, values: &[T]) -> f64
where
    T: AsPrimitive<f64> + Sync,
{
    let partials: Vec<f64> = values
        .par_chunks(PARALLEL_CHUNK)
        .map(|chunk| accumulation.sum_slice(chunk))
        .collect();

    let mut acc = Accumulator::new(accumulation);
    for partial in partials {
        acc.add(partial);
    }
    acc.total()
}

// ============================================================================
// Trace Helpers
// ============================================================================

/// Write one line per element to stderr in the legacy fixed-width format.
///
/// Install via the builder's `trace` parameter to mirror the diagnostic
/// output of the original native routine.
#[cfg(feature = "std")]
pub fn stderr_trace(event: &TraceEvent) {
    eprintln!("---\t {:14.5}", event.value);
}
