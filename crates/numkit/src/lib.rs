//! # numkit — Native-Callable Numeric Utilities for Rust
//!
//! Small, stateless numeric routines designed to be invoked from other
//! languages through a native calling boundary: buffer reduction (1-D and
//! 2-D summation) and binomial coefficient evaluation via the log-gamma
//! function.
//!
//! ## What is numkit?
//!
//! numkit replaces a family of hand-written native extension routines:
//! callers hand over raw buffers plus scalar shape parameters and get a
//! single `f64` back. Every routine is a pure function of its inputs —
//! no state is held between calls, nothing is allocated on the hot path,
//! and buffers are only ever borrowed.
//!
//! ## Quick Start
//!
//! ### Buffer reduction
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let values = vec![1.0, 2.0, 3.0, 4.0];
//!
//! // Build the reduction processor
//! let reducer = Numkit::new()
//!     .adapter(Reduce)
//!     .build()?;
//!
//! assert_eq!(reducer.sum1d(&values), 10.0);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ### 2-D buffers and layouts
//!
//! Dense 2-D buffers arrive as a flat slice plus `(rows, cols)`. The
//! storage order is always explicit; the default is column-major
//! (element `(i, j)` at offset `j * rows + i`), matching the
//! Fortran-style callers this library is built for:
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! // A 2 x 3 matrix, stored column by column
//! let values = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
//!
//! let reducer = Numkit::new()
//!     .layout(ColumnMajor)
//!     .adapter(Reduce)
//!     .build()?;
//!
//! assert_eq!(reducer.sum2d(&values, 2, 3)?, 21.0);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! Integer buffers are widened to `f64` before the first addition, so
//! the accumulation never truncates:
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let counts: Vec<i64> = vec![5, 10, 15];
//! let reducer = Numkit::new().adapter(Reduce).build()?;
//!
//! assert_eq!(reducer.sum1d(&counts), 30.0);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ### Binomial coefficients
//!
//! `C(n, k)` is evaluated through the log-gamma identity
//! `ln C(n, k) = ln Γ(n+1) - ln Γ(n-k+1) - ln Γ(k+1)`, which avoids
//! factorial overflow for moderately large `n`:
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let binom = Numkit::new().adapter(Binomial).build()?;
//!
//! let c = binom.coefficient(5.0, 2.0)?;
//! assert!((c - 10.0).abs() < 1e-6);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! By default, out-of-domain arguments (`k > n`, negative values) are
//! not rejected: the result is whatever the gamma and exponential
//! evaluations produce, exactly like the C `lgamma`/`exp` chain this
//! replaces. Opt into strict validation when callers should be told:
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let binom = Numkit::new()
//!     .strict_domain(true)
//!     .adapter(Binomial)
//!     .build()?;
//!
//! assert!(binom.coefficient(2.0, 5.0).is_err());
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let values = vec![1.0e10, 1.0, -1.0e10, 1.0];
//!
//! let reducer = Numkit::new()
//!     .accumulation(Compensated)  // Kahan compensated summation
//!     .layout(RowMajor)           // Explicit storage order
//!     .parallel(true)             // Chunked reduction (with the `parallel` feature)
//!     .adapter(Reduce)
//!     .build()?;
//!
//! assert_eq!(reducer.sum2d(&values, 2, 2)?, 2.0);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<f64, NumkitError>`; the `?`
//! operator is idiomatic:
//!
//! ```rust
//! use numkit::prelude::*;
//! # let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//!
//! let reducer = Numkit::new().adapter(Reduce).build()?;
//!
//! match reducer.sum2d(&values, 2, 4) {
//!     Ok(total) => println!("Sum: {total}"),
//!     Err(e) => eprintln!("Reduction failed: {e}"),
//! }
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ## Tracing
//!
//! The legacy native routines printed every element before summing it.
//! That diagnostic output is off by default here; install a trace hook to
//! get it back, in the original visit order:
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let reducer = Numkit::new()
//!     .trace(stderr_trace)  // One stderr line per element
//!     .adapter(Reduce)
//!     .build()?;
//!
//! let _ = reducer.sum1d(&[1.0, 2.0, 3.0]);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! numkit = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, float transcendentals route through `libm` and the
//! stderr trace helper is unavailable; everything else works unchanged.
//! The crate never allocates, so `alloc` is not required either.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - errors, layouts, and buffer views.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - validation and execution control.
mod engine;

// Layer 4: Adapters - execution builders and processors.
mod adapters;

// High-level fluent API for the numeric routines.
mod api;

// Standard numkit prelude.
pub mod prelude {
    pub use crate::api::{
        Accumulation,
        Accumulation::Compensated,
        Accumulation::Sequential,
        Adapter::{Binomial, Reduce},
        BinomialEstimator,
        MatrixLayout,
        MatrixLayout::ColumnMajor,
        MatrixLayout::RowMajor,
        MatrixView, NumkitBuilder as Numkit, NumkitError, Reducer, TraceEvent, TraceFn,
    };

    #[cfg(feature = "std")]
    pub use crate::api::stderr_trace;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
