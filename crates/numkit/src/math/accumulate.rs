//! Floating-point accumulation methods.
//!
//! This module provides the summation kernels used by the reduction engine.
//! All accumulation happens in `f64` regardless of the element type; inputs
//! are widened before the first addition.

// External dependencies
use num_traits::AsPrimitive;

// Method for folding element values into a running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accumulation {
    // Plain left-to-right sum: one addition per element.
    #[default]
    Sequential,

    // Kahan compensated sum: tracks the low-order bits lost to rounding.
    Compensated,
}

impl Accumulation {
    // Human-readable name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Compensated => "compensated",
        }
    }

    // Fold a slice into a total, widening each element to f64.
    #[inline]
    pub fn sum_slice<T>(&self, values: &[T]) -> f64
    where
        T: AsPrimitive<f64>,
    {
        let mut acc = Accumulator::new(*self);
        for v in values {
            acc.add(v.as_());
        }
        acc.total()
    }
}

// Running state for a single reduction pass.
//
// The compensation term is carried even for the sequential method (it stays
// zero), so `total` needs no branching.
#[derive(Debug, Clone, Copy)]
pub struct Accumulator {
    method: Accumulation,
    // Running sum.
    sum: f64,
    // Low-order bits lost by previous additions. Meaningful only while the
    // running sum stays finite; non-finite inputs follow IEEE rules through
    // the correction arithmetic.
    c: f64,
}

impl Accumulator {
    // Start an empty accumulation with the given method.
    pub fn new(method: Accumulation) -> Self {
        Self {
            method,
            sum: 0.0,
            c: 0.0,
        }
    }

    // Add one value to the running total.
    #[inline]
    pub fn add(&mut self, x: f64) {
        match self.method {
            Accumulation::Sequential => self.sum += x,
            Accumulation::Compensated => {
                let y = x - self.c;
                let t = self.sum + y;
                self.c = (t - self.sum) - y;
                self.sum = t;
            }
        }
    }

    // Total accumulated so far, with the compensation applied.
    #[inline]
    pub fn total(&self) -> f64 {
        self.sum - self.c
    }

    // Method this accumulator runs.
    pub fn method(&self) -> Accumulation {
        self.method
    }
}
