//! Reduce adapter for buffer summation.
//!
//! ## Purpose
//!
//! This module provides the reduction processor: folding caller-supplied
//! 1-D and 2-D buffers into a single `f64` total under a configured
//! accumulation method, storage layout, and optional trace.
//!
//! ## Design notes
//!
//! * **Stateless**: The processor borrows buffers immutably and keeps no
//!   state between calls; it can be reused and shared freely.
//! * **Widening**: Elements of any widening-capable type are converted to
//!   `f64` before the first addition.
//! * **Delegation**: Delegates the passes to the execution engine.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with defaults.
//! * **Layout**: 2-D buffers are interpreted under the configured storage
//!   order (column-major unless configured otherwise).
//!
//! ## Invariants
//!
//! * `sum2d` accepts only buffers whose length equals `rows * cols`.
//! * Empty buffers and zero-dimension shapes sum to exactly `0.0`.
//!
//! ## Non-goals
//!
//! * This adapter does not evaluate binomial coefficients (use the
//!   binomial adapter).
//! * This adapter does not copy or own buffer contents.

// External dependencies
use num_traits::AsPrimitive;

// Internal dependencies
use crate::engine::executor::{self, ReduceConfig, TraceFn};
use crate::engine::validator::Validator;
use crate::math::accumulate::Accumulation;
use crate::primitives::errors::NumkitError;
use crate::primitives::view::{MatrixLayout, MatrixView};

// ============================================================================
// Reduce Builder
// ============================================================================

/// Builder for the reduction processor.
#[derive(Debug, Clone)]
pub struct ReduceBuilder {
    /// Accumulation method for the running total.
    pub accumulation: Accumulation,

    /// Storage order assumed for 2-D buffers.
    pub layout: MatrixLayout,

    /// Per-element trace hook (forces the sequential path).
    pub trace: Option<TraceFn>,

    /// Parallel execution hint (needs the `parallel` feature).
    pub parallel: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for ReduceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReduceBuilder {
    /// Create a new reduce builder with default parameters.
    fn new() -> Self {
        Self {
            accumulation: Accumulation::default(),
            layout: MatrixLayout::default(),
            trace: None,
            parallel: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the accumulation method.
    pub fn accumulation(mut self, method: Accumulation) -> Self {
        self.accumulation = method;
        self
    }

    /// Set the storage order assumed for 2-D buffers.
    pub fn layout(mut self, layout: MatrixLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Install a per-element trace hook.
    pub fn trace(mut self, hook: TraceFn) -> Self {
        self.trace = Some(hook);
        self
    }

    /// Set the parallel execution hint.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the reduction processor.
    pub fn build(self) -> Result<Reducer, NumkitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(Reducer { config: self })
    }
}

// ============================================================================
// Reduction Processor
// ============================================================================

/// Reduction processor for 1-D and 2-D buffers.
pub struct Reducer {
    config: ReduceBuilder,
}

impl Reducer {
    // Assemble the engine configuration for one pass.
    fn pass_config(&self) -> ReduceConfig {
        ReduceConfig {
            accumulation: self.config.accumulation,
            trace: self.config.trace,
            parallel: self.config.parallel,
        }
    }

    /// Sum a 1-D buffer, widening each element to `f64`.
    ///
    /// An empty buffer sums to exactly `0.0`. NaN and infinities in the
    /// buffer flow through the accumulation untouched.
    pub fn sum1d<T>(&self, values: &[T]) -> f64
    where
        T: AsPrimitive<f64> + Sync,
    {
        executor::sum_slice(&self.pass_config(), values)
    }

    /// Sum a dense `rows x cols` buffer under the configured layout.
    ///
    /// Zero rows or zero columns (with an empty buffer) yield `Ok(0.0)`.
    /// Fails with [`NumkitError::ShapeMismatch`] if the buffer length is
    /// not `rows * cols`, and with [`NumkitError::DimensionOverflow`] if
    /// the product overflows.
    pub fn sum2d<T>(&self, values: &[T], rows: usize, cols: usize) -> Result<f64, NumkitError>
    where
        T: AsPrimitive<f64> + Sync,
    {
        let view = MatrixView::new(values, rows, cols, self.config.layout)?;
        Ok(executor::sum_view(&self.pass_config(), &view))
    }

    /// Sum an already-constructed matrix view.
    ///
    /// The view's own layout governs the traversal; the processor's
    /// configured layout is not consulted.
    pub fn sum_matrix<T>(&self, view: &MatrixView<'_, T>) -> f64
    where
        T: AsPrimitive<f64> + Sync,
    {
        executor::sum_view(&self.pass_config(), view)
    }

    /// Storage order this processor assumes for `sum2d`.
    pub fn layout(&self) -> MatrixLayout {
        self.config.layout
    }
}
