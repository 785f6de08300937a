//! Loop-order, unrolling, transposition and tiling experiments for dense
//! integer matrix multiplication.
//!
//! I built this to see how much of GEMM performance is just memory access
//! order. Every variant computes the same `C = A × B` for square `i32`
//! matrices and is checked element for element against a plain i-j-k
//! reference.
//!
//! ## Usage
//!
//! ```
//! use matmul_lab::{Matrix, Variant};
//!
//! let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]);
//! let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]);
//!
//! let c = Variant::TiledIkj.multiply(&a, &b, 32);
//! assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
//! ```
//!
//! The benchmark loop with verification after every run:
//!
//! ```
//! use matmul_lab::{Harness, Matrix, Variant};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let a = Matrix::random(16, &mut rng);
//! let b = Matrix::random(16, &mut rng);
//!
//! let mut harness = Harness::new(a, b).unwrap();
//! let timing = harness.run(Variant::Bt, 4, 3).unwrap();
//! println!("{}", timing);
//! ```
//!
//! ## What's inside
//!
//! - i-j-k and i-k-j loop orders, each with a 2× unrolled form
//! - AT / BT variants that transpose one operand first
//! - Tiled versions of all four loop orders with clipped edge tiles
//! - Strassen recursion with zero padding for arbitrary sizes
//!
//! Arithmetic wraps on overflow. With operands drawn from the full
//! positive `i32` range the products overflow immediately; results are
//! exact modulo 2^32, which is all the comparison needs.

pub mod blocked;
pub mod config;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod recursive;
pub mod transposed;
pub mod variant;

pub use config::BenchConfig;
pub use error::{ConfigError, HarnessError};
pub use harness::{Harness, Timing, verify};
pub use matrix::reference::{matmul_reference, reference_product};
pub use matrix::{Elem, Matrix};
pub use variant::Variant;
