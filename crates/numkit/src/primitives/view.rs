//! Borrowed matrix views over caller-supplied buffers.
//!
//! ## Purpose
//!
//! This module defines the 2-D data model for reduction: a dense matrix
//! stored in a flat buffer under an explicit storage order. Views borrow the
//! caller's memory; they never copy, own, or mutate it.
//!
//! ## Design notes
//!
//! * **Checked construction**: A view can only exist if the buffer length
//!   matches the stated `rows * cols`, so indexing needs no per-access
//!   shape checks.
//! * **Explicit layout**: Storage order is a parameter, never an assumption.
//!   The default is column-major, matching the Fortran-style callers this
//!   library is built for.
//! * **Zero-cost**: Views are `Copy` (a slice reference plus three words).
//!
//! ## Key concepts
//!
//! * **MatrixLayout**: Maps a logical `(row, col)` position to a flat offset.
//! * **MatrixView**: A borrowed slice tagged with dimensions and layout.
//!
//! ## Invariants
//!
//! * `values.len() == rows * cols` for every constructed view.
//! * `offset(row, col)` is in bounds for `row < rows`, `col < cols`.
//!
//! ## Non-goals
//!
//! * This module does not iterate or reduce (handled by the engine).
//! * This module does not support strided or sparse storage.

// Internal dependencies
use crate::primitives::errors::NumkitError;

// ============================================================================
// Matrix Layout
// ============================================================================

/// Storage order of a dense 2-D buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixLayout {
    /// Element `(i, j)` lives at flat offset `i * cols + j`.
    RowMajor,

    /// Element `(i, j)` lives at flat offset `j * rows + i`.
    #[default]
    ColumnMajor,
}

impl MatrixLayout {
    /// Human-readable name of the layout.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RowMajor => "row-major",
            Self::ColumnMajor => "column-major",
        }
    }

    /// Flat offset of logical position `(row, col)` in a `rows x cols` buffer.
    #[inline]
    pub fn offset(&self, row: usize, col: usize, rows: usize, cols: usize) -> usize {
        match self {
            Self::RowMajor => row * cols + col,
            Self::ColumnMajor => col * rows + row,
        }
    }
}

// ============================================================================
// Matrix View
// ============================================================================

/// Borrowed view of a dense `rows x cols` matrix in a flat buffer.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    /// The flat element buffer, of length exactly `rows * cols`.
    values: &'a [T],
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Storage order of `values`.
    layout: MatrixLayout,
}

impl<'a, T> MatrixView<'a, T> {
    /// Create a view, checking the buffer against the stated shape.
    ///
    /// Fails with [`NumkitError::DimensionOverflow`] if `rows * cols` does
    /// not fit in `usize`, and with [`NumkitError::ShapeMismatch`] if the
    /// buffer length differs from the product. A zero-row or zero-column
    /// view over an empty buffer is valid.
    pub fn new(
        values: &'a [T],
        rows: usize,
        cols: usize,
        layout: MatrixLayout,
    ) -> Result<Self, NumkitError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(NumkitError::DimensionOverflow { rows, cols })?;
        if values.len() != expected {
            return Err(NumkitError::ShapeMismatch {
                rows,
                cols,
                len: values.len(),
            });
        }
        Ok(Self {
            values,
            rows,
            cols,
            layout,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Storage order of the underlying buffer.
    #[inline]
    pub fn layout(&self) -> MatrixLayout {
        self.layout
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the view holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying flat buffer in storage order.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.values
    }

    /// Element at logical position `(row, col)`.
    ///
    /// Callers must keep `row < rows` and `col < cols`; a position outside
    /// the shape maps to an unrelated offset or panics.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T
    where
        T: Copy,
    {
        debug_assert!(row < self.rows && col < self.cols);
        self.values[self.layout.offset(row, col, self.rows, self.cols)]
    }
}
