//! numkit Binomial Coefficient Examples
//!
//! This example demonstrates the binomial evaluator:
//! - A Pascal's-triangle table from the log-gamma identity
//! - Log-scale evaluation beyond the f64 overflow threshold
//! - Legacy propagation vs. strict domain validation

use numkit::prelude::*;

fn main() -> Result<(), NumkitError> {
    println!("{}", "=".repeat(80));
    println!("numkit Binomial Coefficient Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_pascal_table()?;
    example_2_log_scale()?;
    example_3_domain_modes()?;

    Ok(())
}

/// Example 1: Pascal's Triangle
/// Demonstrates coefficient evaluation over small integer arguments
fn example_1_pascal_table() -> Result<(), NumkitError> {
    println!("Example 1: Pascal's Triangle via log-gamma");
    println!("{}", "-".repeat(80));

    let binom = Numkit::new().adapter(Binomial).build()?;

    for n in 0..=8 {
        print!("n={n:>2}: ");
        for k in 0..=n {
            let c = binom.coefficient(n as f64, k as f64)?;
            print!("{:>6.0}", c.round());
        }
        println!();
    }

    println!();
    Ok(())
}

/// Example 2: Log Scale
/// Demonstrates ln_coefficient where the coefficient itself overflows
fn example_2_log_scale() -> Result<(), NumkitError> {
    println!("Example 2: Log-Scale Evaluation");
    println!("{}", "-".repeat(80));

    let binom = Numkit::new().adapter(Binomial).build()?;

    for (n, k) in [(52.0, 5.0), (1000.0, 500.0), (5000.0, 2500.0)] {
        let ln = binom.ln_coefficient(n, k)?;
        let c = binom.coefficient(n, k)?;
        println!("ln C({n}, {k}) = {ln:>12.4}   C = {c:e}");
    }
    println!("(the log form stays finite long after exp overflows)");

    println!();
    Ok(())
}

/// Example 3: Domain Modes
/// Demonstrates legacy propagation and opt-in strict validation
fn example_3_domain_modes() -> Result<(), NumkitError> {
    println!("Example 3: Domain Modes");
    println!("{}", "-".repeat(80));

    let legacy = Numkit::new().adapter(Binomial).build()?;
    let strict = Numkit::new()
        .strict_domain(true)
        .adapter(Binomial)
        .build()?;

    // k > n: the legacy path propagates whatever the gamma chain produces
    println!("legacy C(2, 5) = {}", legacy.coefficient(2.0, 5.0)?);

    // The strict path converts the same arguments into an error
    match strict.coefficient(2.0, 5.0) {
        Ok(c) => println!("strict C(2, 5) = {c}"),
        Err(e) => println!("strict C(2, 5) -> error: {e}"),
    }

    println!();
    Ok(())
}
