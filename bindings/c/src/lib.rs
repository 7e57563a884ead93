//! C bindings for numkit.
//!
//! Provides foreign-runtime access to the numkit numeric routines via C FFI.
//! Results travel through caller-supplied out-parameters; every function
//! returns a status code. No function allocates, so there is nothing for the
//! caller to free.

#![allow(unsafe_op_in_unsafe_fn)]

use core::ffi::{c_char, c_double};
use std::slice;

use numkit::internals::engine::executor::{self, ReduceConfig};
use numkit::internals::engine::validator::Validator;
use numkit::internals::math::gamma;
use numkit::prelude::{ColumnMajor, MatrixView};

// ============================================================================
// Status Codes
// ============================================================================

/// Operation completed; the result was written to `out`.
pub const NUMKIT_OK: i32 = 0;
/// A required pointer was null.
pub const NUMKIT_ERR_NULL_POINTER: i32 = 1;
/// A negative length was passed for a 1-D buffer.
pub const NUMKIT_ERR_INVALID_LENGTH: i32 = 2;
/// Negative or unaddressable dimensions were passed for a 2-D buffer.
pub const NUMKIT_ERR_INVALID_DIMENSIONS: i32 = 3;
/// Binomial arguments rejected by strict-mode domain validation.
pub const NUMKIT_ERR_DOMAIN: i32 = 4;

// ============================================================================
// Reduction C API
// ============================================================================

/// Sum a 1-D buffer of 64-bit integers into `*out` as a double.
///
/// A zero `length` writes `0.0` and permits a null `values` pointer.
/// A negative `length` fails with `NUMKIT_ERR_INVALID_LENGTH` before any
/// memory is touched, leaving `*out` unwritten.
///
/// # Safety
/// `values` must point to at least `length` readable `int64_t` elements
/// whenever `length > 0`, and `out` must point to a writable double.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numkit_sum1d(
    values: *const i64,
    length: i64,
    out: *mut c_double,
) -> i32 {
    if out.is_null() {
        return NUMKIT_ERR_NULL_POINTER;
    }
    if length < 0 {
        return NUMKIT_ERR_INVALID_LENGTH;
    }
    if length == 0 {
        *out = 0.0;
        return NUMKIT_OK;
    }
    if values.is_null() {
        return NUMKIT_ERR_NULL_POINTER;
    }

    let slice = slice::from_raw_parts(values, length as usize);
    *out = executor::sum_slice(&ReduceConfig::default(), slice);
    NUMKIT_OK
}

/// Sum a dense `rows x cols` buffer of doubles into `*out`.
///
/// The buffer is interpreted as **column-major**: element `(i, j)` lives at
/// offset `j * rows + i`. Zero `rows` or `cols` writes `0.0` and permits a
/// null `values` pointer. Negative or unaddressable dimensions fail with
/// `NUMKIT_ERR_INVALID_DIMENSIONS` before any memory is touched.
///
/// # Safety
/// `values` must point to at least `rows * cols` readable doubles whenever
/// both dimensions are positive, and `out` must point to a writable double.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numkit_sum2d(
    values: *const c_double,
    rows: i64,
    cols: i64,
    out: *mut c_double,
) -> i32 {
    if out.is_null() {
        return NUMKIT_ERR_NULL_POINTER;
    }
    if rows < 0 || cols < 0 {
        return NUMKIT_ERR_INVALID_DIMENSIONS;
    }

    let count = match (rows as u64)
        .checked_mul(cols as u64)
        .and_then(|n| usize::try_from(n).ok())
    {
        Some(n) => n,
        None => return NUMKIT_ERR_INVALID_DIMENSIONS,
    };
    if count == 0 {
        *out = 0.0;
        return NUMKIT_OK;
    }
    if values.is_null() {
        return NUMKIT_ERR_NULL_POINTER;
    }

    let slice = slice::from_raw_parts(values, count);
    let view = match MatrixView::new(slice, rows as usize, cols as usize, ColumnMajor) {
        Ok(v) => v,
        Err(_) => return NUMKIT_ERR_INVALID_DIMENSIONS,
    };
    *out = executor::sum_view(&ReduceConfig::default(), &view);
    NUMKIT_OK
}

// ============================================================================
// Binomial C API
// ============================================================================

/// Write the natural log of the binomial coefficient `C(n, k)` to `*out`.
///
/// Legacy semantics: arguments are never validated. Out-of-domain inputs
/// produce whatever the log-gamma evaluations produce (infinities, NaN)
/// and the status is still `NUMKIT_OK`.
///
/// # Safety
/// `out` must point to a writable double.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numkit_ln_binomial(n: c_double, k: c_double, out: *mut c_double) -> i32 {
    if out.is_null() {
        return NUMKIT_ERR_NULL_POINTER;
    }
    *out = gamma::ln_binomial(n, k);
    NUMKIT_OK
}

/// Write the binomial coefficient `C(n, k)` to `*out`.
///
/// Legacy semantics: arguments are never validated (see
/// [`numkit_ln_binomial`]); the value overflows to infinity beyond the
/// double range.
///
/// # Safety
/// `out` must point to a writable double.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numkit_binomial(n: c_double, k: c_double, out: *mut c_double) -> i32 {
    if out.is_null() {
        return NUMKIT_ERR_NULL_POINTER;
    }
    *out = gamma::binomial(n, k);
    NUMKIT_OK
}

/// Write the binomial coefficient `C(n, k)` to `*out`, with validation.
///
/// Strict-mode variant of [`numkit_binomial`]: arguments must be finite,
/// non-negative, and satisfy `k <= n`. Violations fail with
/// `NUMKIT_ERR_DOMAIN` and leave `*out` unwritten.
///
/// # Safety
/// `out` must point to a writable double.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numkit_binomial_checked(
    n: c_double,
    k: c_double,
    out: *mut c_double,
) -> i32 {
    if out.is_null() {
        return NUMKIT_ERR_NULL_POINTER;
    }
    if Validator::validate_binomial_domain(n, k).is_err() {
        return NUMKIT_ERR_DOMAIN;
    }
    *out = gamma::binomial(n, k);
    NUMKIT_OK
}

// ============================================================================
// Status Messages
// ============================================================================

/// Map a status code to a static, NUL-terminated ASCII message.
///
/// Unknown codes map to a generic message. The returned string is never
/// null, never allocated, and must not be freed by the caller.
#[unsafe(no_mangle)]
pub extern "C" fn numkit_status_message(status: i32) -> *const c_char {
    let msg: &'static [u8] = match status {
        NUMKIT_OK => b"ok\0",
        NUMKIT_ERR_NULL_POINTER => b"null pointer argument\0",
        NUMKIT_ERR_INVALID_LENGTH => b"negative buffer length\0",
        NUMKIT_ERR_INVALID_DIMENSIONS => b"invalid buffer dimensions\0",
        NUMKIT_ERR_DOMAIN => b"binomial arguments out of domain\0",
        _ => b"unknown status\0",
    };
    msg.as_ptr() as *const c_char
}
