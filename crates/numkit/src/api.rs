//! High-level API for numkit.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring the numeric routines and
//! choosing an execution adapter (Reduce or Binomial).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter
//!   builders.
//! * **Validated**: Parameters are validated during adapter construction.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Reduce (buffer summation) and Binomial
//!   (coefficient evaluation).
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter)`.
//! * **Validation**: Parameters are validated when `.build()` is called on
//!   the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`NumkitBuilder`] via `Numkit::new()`.
//! 2. Chain configuration methods (`.accumulation()`, `.layout()`, etc.).
//! 3. Select an adapter via `.adapter(Reduce)` or `.adapter(Binomial)` to
//!    get an execution builder, then `.build()` it.

// Internal dependencies
use crate::adapters::binomial::BinomialBuilder;
use crate::adapters::reduce::ReduceBuilder;

// Publicly re-exported types
pub use crate::adapters::binomial::BinomialEstimator;
pub use crate::adapters::reduce::Reducer;
pub use crate::engine::executor::{TraceEvent, TraceFn};
pub use crate::math::accumulate::Accumulation;
pub use crate::primitives::errors::NumkitError;
pub use crate::primitives::view::{MatrixLayout, MatrixView};

#[cfg(feature = "std")]
pub use crate::engine::executor::stderr_trace;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Binomial, Reduce};
}

/// Fluent builder for configuring numkit routines.
#[derive(Debug, Clone)]
pub struct NumkitBuilder {
    /// Accumulation method for reduction totals.
    pub accumulation: Option<Accumulation>,

    /// Storage order assumed for 2-D buffers (Reduce only).
    pub layout: Option<MatrixLayout>,

    /// Per-element trace hook (Reduce only).
    pub trace: Option<TraceFn>,

    /// Parallel execution hint (Reduce only).
    pub parallel: Option<bool>,

    /// Strict-mode domain validation (Binomial only).
    pub strict_domain: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for NumkitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NumkitBuilder {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: NumkitAdapter,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            accumulation: None,
            layout: None,
            trace: None,
            parallel: None,
            strict_domain: None,
            duplicate_param: None,
        }
    }

    /// Set the accumulation method for reduction totals.
    pub fn accumulation(mut self, method: Accumulation) -> Self {
        if self.accumulation.is_some() {
            self.duplicate_param = Some("accumulation");
        }
        self.accumulation = Some(method);
        self
    }

    /// Set the storage order assumed for 2-D buffers (Reduce only).
    pub fn layout(mut self, layout: MatrixLayout) -> Self {
        if self.layout.is_some() {
            self.duplicate_param = Some("layout");
        }
        self.layout = Some(layout);
        self
    }

    /// Install a per-element trace hook (Reduce only).
    ///
    /// The hook observes every element in visit order and forces the
    /// sequential execution path.
    pub fn trace(mut self, hook: TraceFn) -> Self {
        if self.trace.is_some() {
            self.duplicate_param = Some("trace");
        }
        self.trace = Some(hook);
        self
    }

    /// Set the parallel execution hint (Reduce only).
    ///
    /// Takes effect only when the `parallel` feature is compiled in;
    /// ignored otherwise, and ignored whenever a trace is installed.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Enable strict-mode domain validation (Binomial only).
    pub fn strict_domain(mut self, enabled: bool) -> Self {
        if self.strict_domain.is_some() {
            self.duplicate_param = Some("strict_domain");
        }
        self.strict_domain = Some(enabled);
        self
    }
}

/// Trait for transitioning from the generic builder to an execution builder.
pub trait NumkitAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`NumkitBuilder`] into a specialized execution builder.
    fn convert(builder: NumkitBuilder) -> Self::Output;
}

/// Marker for buffer reduction.
#[derive(Debug, Clone, Copy)]
pub struct Reduce;

impl NumkitAdapter for Reduce {
    type Output = ReduceBuilder;

    fn convert(builder: NumkitBuilder) -> Self::Output {
        let mut result = ReduceBuilder::default();

        if let Some(accumulation) = builder.accumulation {
            result.accumulation = accumulation;
        }
        if let Some(layout) = builder.layout {
            result.layout = layout;
        }
        if let Some(trace) = builder.trace {
            result.trace = Some(trace);
        }
        if let Some(parallel) = builder.parallel {
            result.parallel = parallel;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for binomial coefficient evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Binomial;

impl NumkitAdapter for Binomial {
    type Output = BinomialBuilder;

    fn convert(builder: NumkitBuilder) -> Self::Output {
        let mut result = BinomialBuilder::default();

        if let Some(strict) = builder.strict_domain {
            result.strict_domain = strict;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
