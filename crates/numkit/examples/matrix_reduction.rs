//! numkit Buffer Reduction Examples
//!
//! This example demonstrates the reduction features:
//! - 1-D summation with element widening
//! - 2-D summation under explicit storage layouts
//! - Compensated accumulation for ill-conditioned data
//! - The opt-in per-element trace

use numkit::prelude::*;

fn main() -> Result<(), NumkitError> {
    println!("{}", "=".repeat(80));
    println!("numkit Buffer Reduction Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_sums()?;
    example_2_layouts()?;
    example_3_compensated()?;
    example_4_trace()?;

    Ok(())
}

/// Example 1: Basic Sums
/// Demonstrates 1-D reduction over float and integer buffers
fn example_1_basic_sums() -> Result<(), NumkitError> {
    println!("Example 1: Basic Sums");
    println!("{}", "-".repeat(80));

    let reducer = Numkit::new().adapter(Reduce).build()?;

    let floats = vec![1.5, 2.5, 3.0];
    println!("sum1d({floats:?}) = {}", reducer.sum1d(&floats));

    // Integer buffers widen to f64 before the first addition
    let counts: Vec<i64> = vec![2_000_000_000, 2_000_000_000, 2_000_000_000];
    println!("sum1d({counts:?}) = {:e}", reducer.sum1d(&counts));

    println!();
    Ok(())
}

/// Example 2: Storage Layouts
/// Demonstrates 2-D reduction under both storage orders
fn example_2_layouts() -> Result<(), NumkitError> {
    println!("Example 2: Storage Layouts");
    println!("{}", "-".repeat(80));

    // The logical matrix [[1, 2, 3], [4, 5, 6]] in both storage orders
    let column_major = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let row_major = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    let cm_reducer = Numkit::new().layout(ColumnMajor).adapter(Reduce).build()?;
    let rm_reducer = Numkit::new().layout(RowMajor).adapter(Reduce).build()?;

    println!("column-major total: {}", cm_reducer.sum2d(&column_major, 2, 3)?);
    println!("row-major total:    {}", rm_reducer.sum2d(&row_major, 2, 3)?);
    println!("(the sum visits every element once, so both agree)");

    println!();
    Ok(())
}

/// Example 3: Compensated Accumulation
/// Demonstrates Kahan summation retaining small contributions
fn example_3_compensated() -> Result<(), NumkitError> {
    println!("Example 3: Compensated Accumulation");
    println!("{}", "-".repeat(80));

    // A huge leading term followed by many increments below the rounding
    // granularity of the running total
    let mut values = vec![1.0e16];
    values.extend(std::iter::repeat_n(1.0, 10_000));

    let naive = Numkit::new().adapter(Reduce).build()?;
    let kahan = Numkit::new()
        .accumulation(Compensated)
        .adapter(Reduce)
        .build()?;

    println!("sequential:  {:.1}", naive.sum1d(&values));
    println!("compensated: {:.1}", kahan.sum1d(&values));

    println!();
    Ok(())
}

/// Example 4: Per-Element Trace
/// Demonstrates the opt-in replacement for the legacy debug prints
fn example_4_trace() -> Result<(), NumkitError> {
    println!("Example 4: Per-Element Trace");
    println!("{}", "-".repeat(80));

    let reducer = Numkit::new()
        .trace(stderr_trace) // One stderr line per element, legacy format
        .adapter(Reduce)
        .build()?;

    let values = vec![10.0, 20.5, 30.25];
    let total = reducer.sum1d(&values);
    println!("traced total: {total}");

    println!();
    Ok(())
}
