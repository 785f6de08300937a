//! Correctness harness and timing loop.
//!
//! The reference product is computed once per harness. Every timed
//! repetition of a variant is followed by a full element-wise comparison
//! against it; the first mismatch aborts the run with an error instead
//! of reporting a time for wrong output.

use crate::error::{HarnessError, Result};
use crate::matrix::reference::reference_product;
use crate::matrix::Matrix;
use crate::variant::Variant;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Average wall-clock time of one variant over several repetitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    pub variant: Variant,
    pub repetitions: usize,
    pub total: Duration,
}

impl Timing {
    pub fn average_secs(&self) -> f64 {
        if self.repetitions == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() / self.repetitions as f64
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Avg Time for {} Calculation: {:.6}",
            self.variant.label(),
            self.average_secs()
        )
    }
}

/// Compares `c` with `reference` element by element.
pub fn verify(c: &Matrix, reference: &Matrix, variant: Variant) -> Result<()> {
    if c.size() != reference.size() {
        return Err(HarnessError::DimensionMismatch {
            expected: reference.size(),
            actual: c.size(),
        });
    }
    match c.first_mismatch(reference) {
        None => Ok(()),
        Some((row, col, actual, expected)) => Err(HarnessError::Mismatch {
            variant: variant.label().to_string(),
            row,
            col,
            expected,
            actual,
        }),
    }
}

/// Owns the operands, the reference product and the output buffer.
pub struct Harness {
    a: Matrix,
    b: Matrix,
    reference: Matrix,
    c: Matrix,
}

impl Harness {
    /// Computes the reference product of `a` and `b`.
    pub fn new(a: Matrix, b: Matrix) -> Result<Self> {
        if a.size() != b.size() {
            return Err(HarnessError::DimensionMismatch {
                expected: a.size(),
                actual: b.size(),
            });
        }
        let reference = reference_product(&a, &b);
        let c = Matrix::zeros(a.size());
        Ok(Self { a, b, reference, c })
    }

    pub fn size(&self) -> usize {
        self.a.size()
    }

    pub fn reference(&self) -> &Matrix {
        &self.reference
    }

    /// Output of the most recent variant call.
    pub fn output(&self) -> &Matrix {
        &self.c
    }

    /// Runs `variant` once and verifies the result.
    pub fn run_once(&mut self, variant: Variant, tile: usize) -> Result<Duration> {
        let start = Instant::now();
        variant.run(&self.a, &self.b, &mut self.c, tile);
        let elapsed = start.elapsed();

        verify(&self.c, &self.reference, variant)
            .inspect_err(|e| error!(error = %e, "verification failed"))?;
        Ok(elapsed)
    }

    /// Runs `variant` `repetitions` times, verifying after each run.
    pub fn run(&mut self, variant: Variant, tile: usize, repetitions: usize) -> Result<Timing> {
        let mut total = Duration::ZERO;
        for rep in 0..repetitions {
            let elapsed = self.run_once(variant, tile)?;
            debug!(
                variant = variant.label(),
                rep,
                elapsed_us = elapsed.as_micros() as u64,
                "run verified"
            );
            total += elapsed;
        }
        Ok(Timing {
            variant,
            repetitions,
            total,
        })
    }
}
