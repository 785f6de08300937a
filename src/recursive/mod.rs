//! Divide-and-conquer multiplication.
//!
//! Available implementations:
//! - `strassen`: seven-product quadrant recursion over zero-padded
//!   power-of-two matrices

pub mod strassen;
